//! Page selection through the handler registry.

use crate::retrieval::helpers::{archive_conversation, juliet, registry, repo, romeo, runtime, start};
use rstest::rstest;
use scrollkeeper::archive::{
    adapters::memory::InMemoryConversationRepository,
    domain::{BeforeCursor, PaginationRequest, PaginationResult, RetrievalQuery, RetrievalReply},
    ports::{IqQuery, IqRequest, IqResult},
    services::RetrievalConfig,
};
use std::io;
use tokio::runtime::Runtime;

type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn fetch(
    rt: &Runtime,
    repo: &InMemoryConversationRepository,
    pagination: Option<PaginationRequest>,
) -> TestResult<RetrievalReply> {
    let mut query = RetrievalQuery::new(romeo()?, start());
    query.pagination = pagination;
    let request = IqRequest {
        from: juliet()?,
        payload: IqQuery::Retrieve {
            name: RetrievalConfig::default().qualified_name(),
            query,
        },
    };
    let IqResult::Chat(reply) = rt.block_on(registry(repo).dispatch(request))?;
    Ok(reply)
}

fn bodies(reply: &RetrievalReply) -> Vec<&str> {
    reply.entries.iter().map(|entry| entry.body.as_str()).collect()
}

/// Tests that a query without pagination returns everything and no metadata.
#[rstest]
fn unpaginated_returns_whole_conversation(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[1, 1, 1, 1])?;

    let reply = fetch(&rt, &repo, None)?;

    assert_eq!(bodies(&reply), vec!["line 0", "line 1", "line 2", "line 3"]);
    assert!(reply.pagination.is_none());
    Ok(())
}

/// Tests walking forward through a conversation with `after` cursors.
#[rstest]
fn after_cursors_walk_forward(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[1, 2, 3, 4, 5])?;

    let first = fetch(&rt, &repo, Some(PaginationRequest::new().with_max(2)))?;
    assert_eq!(bodies(&first), vec!["line 0", "line 1"]);
    let last = first
        .pagination
        .and_then(|p| p.last())
        .ok_or("first page reports last")?;

    let second = fetch(
        &rt,
        &repo,
        Some(PaginationRequest::new().with_max(2).with_after(u64::try_from(last)?)),
    )?;
    assert_eq!(bodies(&second), vec!["line 2", "line 3"]);
    assert_eq!(second.pagination, Some(PaginationResult::page(2, 3, 5)));

    let third = fetch(
        &rt,
        &repo,
        Some(PaginationRequest::new().with_max(2).with_after(3)),
    )?;
    assert_eq!(bodies(&third), vec!["line 4"]);
    assert_eq!(third.pagination, Some(PaginationResult::page(4, 4, 5)));
    Ok(())
}

/// Tests requesting the last page with an empty `before` cursor.
#[rstest]
fn empty_before_cursor_returns_last_page(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[1, 1, 1, 1, 1, 1])?;
    let before: BeforeCursor = "".parse()?;

    let reply = fetch(
        &rt,
        &repo,
        Some(PaginationRequest::new().with_max(2).with_before(before)),
    )?;

    assert_eq!(bodies(&reply), vec!["line 4", "line 5"]);
    assert_eq!(reply.pagination, Some(PaginationResult::page(4, 5, 6)));
    Ok(())
}

/// Tests that an out-of-range index yields an empty, counted page.
#[rstest]
fn index_past_end_yields_empty_page(
    runtime: io::Result<Runtime>,
    repo: InMemoryConversationRepository,
) -> TestResult {
    let rt = runtime?;
    archive_conversation(&repo, &[1, 1, 1, 1, 1])?;

    let reply = fetch(
        &rt,
        &repo,
        Some(PaginationRequest::new().with_max(3).with_index(10)),
    )?;

    assert!(reply.entries.is_empty());
    assert_eq!(reply.pagination, Some(PaginationResult::empty(5)));
    Ok(())
}
