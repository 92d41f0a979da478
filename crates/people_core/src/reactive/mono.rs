//! Zero-or-one async container.

use crate::reactive::error::{ReactiveError, ReactiveResult};
use futures::future::{self, BoxFuture};
use futures::FutureExt;
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

type MonoSource<T> = Arc<dyn Fn() -> BoxFuture<'static, ReactiveResult<Option<T>>> + Send + Sync>;

/// Cold async computation yielding zero or one value, or a failure.
///
/// `Ok(None)` is a normal empty completion and is never an error.
pub struct Mono<T> {
    source: MonoSource<T>,
}

impl<T> Clone for Mono<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T> Debug for Mono<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mono").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Builds a mono from a future factory; the factory runs once per subscription.
    pub fn from_future<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ReactiveResult<Option<T>>> + Send + 'static,
    {
        Self {
            source: Arc::new(move || factory().boxed()),
        }
    }

    pub fn empty() -> Self {
        Self::from_future(|| future::ready(Ok(None)))
    }

    pub fn error(err: ReactiveError) -> Self {
        Self::from_future(move || future::ready(Err(err.clone())))
    }

    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::just_or_empty(Some(value))
    }

    pub fn just_or_empty(value: Option<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_future(move || future::ready(Ok(value.clone())))
    }

    pub fn map<U, F>(&self, mapper: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let mapper = Arc::new(mapper);
        Mono::from_future(move || {
            let upstream = source();
            let mapper = Arc::clone(&mapper);
            async move { upstream.await.map(|value| value.map(|value| mapper(value))) }
        })
    }

    /// Keeps the value only when `predicate` holds; otherwise completes empty.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let predicate = Arc::new(predicate);
        Self::from_future(move || {
            let upstream = source();
            let predicate = Arc::clone(&predicate);
            async move { upstream.await.map(|value| value.filter(|value| predicate(value))) }
        })
    }

    pub fn do_on_next<F>(&self, hook: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let hook = Arc::new(hook);
        Self::from_future(move || {
            let upstream = source();
            let hook = Arc::clone(&hook);
            async move {
                let result = upstream.await;
                if let Ok(Some(value)) = result.as_ref() {
                    hook(value);
                }
                result
            }
        })
    }

    /// Observes a failure without handling it.
    pub fn do_on_error<F>(&self, hook: F) -> Self
    where
        F: Fn(&ReactiveError) + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let hook = Arc::new(hook);
        Self::from_future(move || {
            let upstream = source();
            let hook = Arc::clone(&hook);
            async move {
                let result = upstream.await;
                if let Err(err) = result.as_ref() {
                    hook(err);
                }
                result
            }
        })
    }

    /// Replaces any failure with `fallback`, completing successfully.
    pub fn on_error_return(&self, fallback: T) -> Self
    where
        T: Clone + Sync,
    {
        self.on_error_return_with(move |_| fallback.clone())
    }

    pub fn on_error_return_with<F>(&self, fallback: F) -> Self
    where
        F: Fn(&ReactiveError) -> T + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.source);
        let fallback = Arc::new(fallback);
        Self::from_future(move || {
            let upstream = source();
            let fallback = Arc::clone(&fallback);
            async move {
                match upstream.await {
                    Ok(value) => Ok(value),
                    Err(err) => Ok(Some(fallback(&err))),
                }
            }
        })
    }

    pub fn default_if_empty(&self, default: T) -> Self
    where
        T: Clone + Sync,
    {
        self.switch_if_empty(Self::just(default))
    }

    /// Subscribes to `alternative` when this mono completes empty.
    pub fn switch_if_empty(&self, alternative: Self) -> Self {
        let source = Arc::clone(&self.source);
        Self::from_future(move || {
            let upstream = source();
            let alternative = alternative.to_future();
            async move {
                match upstream.await? {
                    Some(value) => Ok(Some(value)),
                    None => alternative.await,
                }
            }
        })
    }

    /// Starts a fresh subscription and returns its outcome as a future.
    pub fn to_future(&self) -> BoxFuture<'static, ReactiveResult<Option<T>>> {
        (self.source)()
    }

    /// Delivers the value, if any, to `on_next`.
    ///
    /// Returns the failure instead of invoking `on_next` when the source fails.
    pub async fn subscribe<F>(&self, mut on_next: F) -> ReactiveResult<()>
    where
        F: FnMut(T),
    {
        if let Some(value) = self.to_future().await? {
            on_next(value);
        }
        Ok(())
    }

    /// Waits on the calling thread for the outcome.
    ///
    /// `Ok(None)` means the mono completed empty.
    pub fn block(&self) -> ReactiveResult<Option<T>> {
        futures::executor::block_on(self.to_future())
    }
}

#[cfg(test)]
mod tests {
    use super::Mono;
    use crate::reactive::ReactiveError;
    use futures::future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn empty_blocks_to_none() {
        assert_eq!(Mono::<i32>::empty().block(), Ok(None));
    }

    #[test]
    fn map_skips_empty_source() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mapped = Mono::<i32>::empty().map(move |value| {
            counter.fetch_add(1, Ordering::SeqCst);
            value * 2
        });

        assert_eq!(mapped.block(), Ok(None));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn source_runs_once_per_subscription() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let mono = Mono::from_future(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            future::ready(Ok(Some("value")))
        });

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        mono.block().unwrap();
        mono.clone().block().unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn on_error_return_recovers_and_keeps_success_untouched() {
        let failed = Mono::<i32>::error(ReactiveError::Upstream("boom".to_string()));
        assert_eq!(failed.on_error_return(7).block(), Ok(Some(7)));
        assert_eq!(Mono::just(1).on_error_return(7).block(), Ok(Some(1)));
    }

    #[test]
    fn on_error_return_does_not_fill_empty() {
        assert_eq!(Mono::<i32>::empty().on_error_return(7).block(), Ok(None));
    }

    #[test]
    fn do_on_error_sees_failure_and_propagates_it() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let mono = Mono::<i32>::error(ReactiveError::NoSuchElement).do_on_error(move |err| {
            assert!(err.is_cardinality_violation());
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(mono.block(), Err(ReactiveError::NoSuchElement));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn switch_if_empty_only_applies_to_empty() {
        assert_eq!(Mono::empty().default_if_empty(3).block(), Ok(Some(3)));
        assert_eq!(Mono::just(1).default_if_empty(3).block(), Ok(Some(1)));
        assert_eq!(Mono::just(4).filter(|v| *v > 10).block(), Ok(None));
    }
}
