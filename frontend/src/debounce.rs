use futures::stream::{self, FusedStream, Stream, StreamExt};
use futures::{FutureExt, pin_mut, select};
use std::future::Future;

/// Coalesces bursts of items into the last one.
///
/// An item is emitted once a `sleep()` future completes with no newer item
/// arriving in the meantime. When the source ends, the pending item is
/// flushed immediately. `sleep` is injected so the same combinator runs on
/// browser timers and on tokio in tests.
pub fn debounce<S, F, Fut>(source: S, sleep: F) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    stream::unfold((source.fuse(), sleep), |(mut source, mut sleep)| async move {
        if source.is_terminated() {
            return None;
        }
        let mut latest = source.next().await?;
        loop {
            let quiet_period = sleep().fuse();
            pin_mut!(quiet_period);
            select! {
                next = source.next() => match next {
                    Some(item) => latest = item,
                    None => break,
                },
                () = quiet_period => break,
            }
        }
        Some((latest, (source, sleep)))
    })
}
