//! Relative time and correspondent encoding in retrieval replies.

use crate::retrieval::helpers::{archive_conversation, juliet, repo, romeo, runtime, start};
use chrono::TimeDelta;
use rstest::rstest;
use scrollkeeper::archive::{
    adapters::memory::InMemoryConversationRepository,
    domain::{
        ArchivedMessage, Conversation, Direction, Jid, PaginationRequest, RetrievalQuery,
    },
    services::RetrieveService,
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Tests that a later page starts from the conversation start, not from the
/// message before the page.
#[rstest]
fn later_page_is_relative_to_conversation_start(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[5, 12, 7])?;
    let service = RetrieveService::new(Arc::new(repo));

    let full = rt.block_on(service.retrieve(&juliet()?, &RetrievalQuery::new(romeo()?, start())))?;
    let paged = rt.block_on(service.retrieve(
        &juliet()?,
        &RetrievalQuery::new(romeo()?, start())
            .with_pagination(PaginationRequest::new().with_index(1)),
    ))?;

    let full_elapsed: Vec<i64> = full.entries.iter().map(|e| e.elapsed_seconds).collect();
    let paged_elapsed: Vec<i64> = paged.entries.iter().map(|e| e.elapsed_seconds).collect();
    assert_eq!(full_elapsed, vec![5, 12, 7]);
    assert_eq!(paged_elapsed, vec![17, 7]);
    Ok(())
}

/// Tests that only distinct per-message correspondents are reported and
/// empty bodies survive.
#[rstest]
fn reports_distinct_correspondents_and_empty_bodies(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    let conversation = Conversation::builder(juliet()?.to_bare(), romeo()?, start())
        .with_message(
            ArchivedMessage::new(start() + TimeDelta::seconds(1), Direction::From, "")
                .with_correspondent(Jid::parse("romeo@montague.net/orchard")?),
        )
        .with_message(
            ArchivedMessage::new(start() + TimeDelta::seconds(2), Direction::From, "Peace!")
                .with_correspondent(Jid::parse("mercutio@verona.lit/street")?),
        )
        .build();
    repo.insert(conversation)?;
    let service = RetrieveService::new(Arc::new(repo));

    let reply =
        rt.block_on(service.retrieve(&juliet()?, &RetrievalQuery::new(romeo()?, start())))?;

    let correspondents: Vec<Option<String>> = reply
        .entries
        .iter()
        .map(|e| e.correspondent.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(
        correspondents,
        vec![None, Some("mercutio@verona.lit".to_owned())]
    );
    assert_eq!(reply.entries.first().map(|e| e.body.as_str()), Some(""));
    Ok(())
}
