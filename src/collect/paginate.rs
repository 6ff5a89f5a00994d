use std::future::Future;

use anyhow::Result;
use futures::stream::{self, Stream, TryStreamExt};

/// One page of a paginated directory query, already reduced to the items the
/// caller wants plus the continuation token.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

struct PageState<F> {
    fetch: F,
    token: Option<String>,
    finished: bool,
}

/// Drives a paginated query until the service stops returning a continuation
/// token. The first request carries no token; every later request carries
/// exactly the token of the page before it. Items are yielded lazily in
/// page-arrival order. A fresh stream starts over from the first page; there
/// is no mid-stream resumption.
pub fn paginate<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let start = PageState {
        fetch,
        token: None,
        finished: false,
    };

    stream::try_unfold(start, |mut state| async move {
        if state.finished {
            return Ok::<_, anyhow::Error>(None);
        }
        let page = (state.fetch)(state.token.take()).await?;
        state.token = page.next_page_token;
        state.finished = state.token.is_none();
        Ok(Some((page.items, state)))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, anyhow::Error>)))
    .try_flatten()
}
