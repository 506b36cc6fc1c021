//! Conversation lookup and the not-found path.

use crate::retrieval::helpers::{archive_conversation, repo, romeo, runtime, start};
use chrono::TimeDelta;
use rstest::rstest;
use scrollkeeper::archive::{
    adapters::memory::InMemoryConversationRepository,
    domain::{Jid, RetrievalQuery},
    error::RetrievalError,
    services::RetrieveService,
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Tests that the requester's resource does not affect the lookup.
#[rstest]
fn lookup_uses_bare_requester_and_correspondent(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[1, 1])?;
    let service = RetrieveService::new(Arc::new(repo));

    let other_session = Jid::parse("juliet@capulet.lit/chamber")?;
    let full_correspondent = Jid::parse("romeo@montague.net/orchard")?;
    let reply = rt.block_on(service.retrieve(
        &other_session,
        &RetrievalQuery::new(full_correspondent, start()),
    ))?;

    assert_eq!(reply.entries.len(), 2);
    assert_eq!(reply.correspondent, romeo()?.to_bare());
    Ok(())
}

/// Tests each lookup mismatch that yields the not-found condition.
#[rstest]
#[case::other_owner("nurse@capulet.lit", "romeo@montague.net", 0)]
#[case::other_correspondent("juliet@capulet.lit", "tybalt@capulet.lit", 0)]
#[case::other_start("juliet@capulet.lit", "romeo@montague.net", 60)]
fn mismatched_lookup_is_not_found(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
    #[case] requester: &str,
    #[case] correspondent: &str,
    #[case] start_offset: i64,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[1])?;
    let service = RetrieveService::new(Arc::new(repo));

    let result = rt.block_on(service.retrieve(
        &Jid::parse(requester)?,
        &RetrievalQuery::new(
            Jid::parse(correspondent)?,
            start() + TimeDelta::seconds(start_offset),
        ),
    ));

    assert!(matches!(result, Err(RetrievalError::ItemNotFound)));
    Ok(())
}

/// Tests that clones of the archive share storage.
#[rstest]
fn cloned_repository_sees_inserted_conversations(repo: InMemoryConversationRepository) -> TestResult {
    let clone = repo.clone();
    archive_conversation(&repo, &[1])?;

    assert_eq!(clone.len(), 1);
    assert!(!clone.is_empty());
    Ok(())
}
