//! Zero-or-many async container.

use crate::reactive::error::{ReactiveError, ReactiveResult};
use crate::reactive::mono::Mono;
use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

type FluxSource<T> = Arc<dyn Fn() -> BoxStream<'static, ReactiveResult<T>> + Send + Sync>;

/// Cold, finite async sequence of values, or a failure.
///
/// Each subscription gets its own stream starting from the first element.
/// Dropping that stream cancels the subscription.
pub struct Flux<T> {
    source: FluxSource<T>,
}

impl<T> Clone for Flux<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T> Debug for Flux<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flux").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Builds a flux from a stream factory; the factory runs once per subscription.
    pub fn from_stream_fn<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = ReactiveResult<T>> + Send + 'static,
    {
        Self {
            source: Arc::new(move || factory().boxed()),
        }
    }

    /// Replays `items` on every subscription.
    pub fn from_iterable<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
        I::IntoIter: Send + 'static,
    {
        Self::from_stream_fn(move || stream::iter(items.clone().into_iter().map(Ok)))
    }

    pub fn just(values: Vec<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_iterable(values)
    }

    pub fn empty() -> Self {
        Self::from_stream_fn(stream::empty)
    }

    pub fn error(err: ReactiveError) -> Self {
        Self::from_stream_fn(move || stream::once(future::ready(Err(err.clone()))))
    }

    pub fn map<U, F>(&self, mapper: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let mapper = Arc::new(mapper);
        Flux::from_stream_fn(move || {
            let mapper = Arc::clone(&mapper);
            source().map_ok(move |value| mapper(value))
        })
    }

    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let predicate = Arc::new(predicate);
        Self::from_stream_fn(move || {
            let predicate = Arc::clone(&predicate);
            source().try_filter(move |value| future::ready(predicate(value)))
        })
    }

    /// Emits at most `limit` items, then completes.
    pub fn take(&self, limit: usize) -> Self {
        let source = Arc::clone(&self.source);
        Self::from_stream_fn(move || source().take(limit))
    }

    pub fn do_on_next<F>(&self, hook: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let hook = Arc::new(hook);
        Self::from_stream_fn(move || {
            let hook = Arc::clone(&hook);
            source().inspect_ok(move |value| hook(value))
        })
    }

    /// First element, or an empty mono when the sequence has none.
    pub fn next(&self) -> Mono<T> {
        let source = Arc::clone(&self.source);
        Mono::from_future(move || {
            let mut upstream = source();
            async move { upstream.next().await.transpose() }
        })
    }

    /// The only element of the sequence.
    ///
    /// Fails with `ReactiveError::NoSuchElement` on an empty sequence and
    /// with `ReactiveError::TooManyElements` when a second element arrives.
    pub fn single(&self) -> Mono<T> {
        let source = Arc::clone(&self.source);
        Mono::from_future(move || {
            let mut upstream = source();
            async move {
                let only = match upstream.next().await {
                    Some(item) => item?,
                    None => return Err(ReactiveError::NoSuchElement),
                };
                match upstream.next().await {
                    None => Ok(Some(only)),
                    Some(Err(err)) => Err(err),
                    Some(Ok(_)) => Err(ReactiveError::TooManyElements),
                }
            }
        })
    }

    /// Gathers every element; always present, possibly an empty vec.
    pub fn collect_list(&self) -> Mono<Vec<T>> {
        let source = Arc::clone(&self.source);
        Mono::from_future(move || {
            let upstream = source();
            async move { upstream.try_collect::<Vec<T>>().await.map(Some) }
        })
    }

    pub fn count(&self) -> Mono<usize> {
        let source = Arc::clone(&self.source);
        Mono::from_future(move || {
            let upstream = source();
            async move {
                upstream
                    .try_fold(0usize, |seen, _| future::ready(Ok(seen + 1)))
                    .await
                    .map(Some)
            }
        })
    }

    /// Starts a fresh subscription.
    pub fn to_stream(&self) -> BoxStream<'static, ReactiveResult<T>> {
        (self.source)()
    }

    /// Delivers every element to `on_next` in order.
    ///
    /// Returns the number of delivered elements, or the first failure.
    pub async fn subscribe<F>(&self, mut on_next: F) -> ReactiveResult<usize>
    where
        F: FnMut(T),
    {
        let mut upstream = self.to_stream();
        let mut delivered = 0;
        while let Some(item) = upstream.next().await {
            on_next(item?);
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Waits on the calling thread for the first element; `Ok(None)` when empty.
    pub fn block_first(&self) -> ReactiveResult<Option<T>> {
        self.next().block()
    }

    pub fn block_last(&self) -> ReactiveResult<Option<T>> {
        futures::executor::block_on(
            self.to_stream()
                .try_fold(None, |_, value| future::ready(Ok(Some(value)))),
        )
    }

    pub fn collect_blocking(&self) -> ReactiveResult<Vec<T>> {
        futures::executor::block_on(self.to_stream().try_collect())
    }
}
