/*
[INPUT]:  First-page list parameters and a page fetcher
[OUTPUT]: Item stream that follows `next_cursor` across pages
[POS]:    HTTP layer - cursor pagination shared by list endpoints
[UPDATE]: When list endpoints change their cursor contract
*/

use futures_util::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::collections::HashSet;
use std::future::Future;
use tracing::debug;

use super::error::{IncreaseError, Result};
use crate::types::{ListParams, Page};

/// Walk every page starting at `params`, yielding items one at a time.
///
/// Stops when the server omits `next_cursor` or repeats one it already sent.
pub(crate) fn paginate<'a, C, T, F, Fut>(params: ListParams<C>, fetch: F) -> BoxStream<'a, Result<T>>
where
    C: Clone + Send + 'a,
    T: Send + 'a,
    F: FnMut(ListParams<C>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    let state = (Some(params), fetch, HashSet::<String>::new());

    stream::try_unfold(state, |(next, mut fetch, mut seen)| async move {
        let Some(params) = next else {
            return Ok(None);
        };

        let page = fetch(params.clone()).await?;
        let following = match page.next_cursor {
            Some(cursor) if !cursor.is_empty() && seen.insert(cursor.clone()) => {
                Some(params.with_cursor(cursor))
            }
            Some(cursor) if !cursor.is_empty() => {
                debug!(cursor = %cursor, "cursor repeated, ending pagination");
                None
            }
            _ => None,
        };

        let items = stream::iter(page.data.into_iter().map(Ok::<T, IncreaseError>));
        Ok::<_, IncreaseError>(Some((items, (following, fetch, seen))))
    })
    .try_flatten()
    .boxed()
}
