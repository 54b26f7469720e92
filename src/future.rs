//! Async counterparts of [`pipe`](crate::combinator::pipe),
//! [`compose`](crate::combinator::compose) and
//! [`if_else`](crate::combinator::if_else).
//!
//! Stages are awaited one after the other, never concurrently. [`pipe_async`]
//! keeps one type through its stages; [`AsyncPipeline`] lets each stage
//! convert. The returned futures are boxed, `Send` and `'static` so they can
//! be spawned.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt};

/// A boxed single-argument async stage.
pub type AsyncUnary<T> = Box<dyn Fn(T) -> BoxFuture<'static, T> + Send + Sync>;

pub fn stage<T, F, Fut>(func: F) -> AsyncUnary<T>
where
    T: 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    Box::new(move |value| func(value).boxed())
}

/// Turn a synchronous stage into an already resolved async one.
pub fn lift<T, F>(func: F) -> AsyncUnary<T>
where
    T: Send + 'static,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Box::new(move |value| future::ready(func(value)).boxed())
}

/// `head` is called as soon as the pipeline is, its future and every stage in
/// `rest` are then awaited in order.
pub fn pipe_async<A, T, H, Fut>(head: H, rest: Vec<AsyncUnary<T>>) -> impl Fn(A) -> BoxFuture<'static, T>
where
    T: Send + 'static,
    H: Fn(A) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
{
    let rest = Arc::new(rest);
    move |args: A| {
        let first = head(args);
        let rest = Arc::clone(&rest);
        async move {
            let mut value = first.await;
            for stage in rest.iter() {
                value = stage(value).await;
            }
            value
        }
        .boxed()
    }
}

/// Right-to-left [`pipe_async`].
pub fn compose_async<A, T, H, Fut>(outer: Vec<AsyncUnary<T>>, inner: H) -> impl Fn(A) -> BoxFuture<'static, T>
where
    T: Send + 'static,
    H: Fn(A) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
{
    let mut outer = outer;
    outer.reverse();
    pipe_async(inner, outer)
}

/// Async [`Pipeline`](crate::combinator::Pipeline): stages may change the
/// type and are awaited one after the other.
///
/// Calling the pipeline calls the head right away; everything after it runs as
/// the returned future is polled.
pub struct AsyncPipeline<A, T> {
    run: Box<dyn Fn(A) -> BoxFuture<'static, T> + Send + Sync>,
}

impl<A: 'static, T: Send + 'static> AsyncPipeline<A, T> {
    pub fn new<H, Fut>(head: H) -> Self
    where
        H: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self { run: Box::new(move |args: A| head(args).boxed()) }
    }

    pub fn then<U, F, Fut>(self, stage: F) -> AsyncPipeline<A, U>
    where
        U: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        let run = self.run;
        let stage = Arc::new(stage);
        AsyncPipeline {
            run: Box::new(move |args: A| {
                let previous = run(args);
                let stage = Arc::clone(&stage);
                async move { stage(previous.await).await }.boxed()
            }),
        }
    }

    /// [`then`](Self::then) for a synchronous stage.
    pub fn then_sync<U, F>(self, stage: F) -> AsyncPipeline<A, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.then(move |value: T| future::ready(stage(value)))
    }

    pub fn call(&self, args: A) -> BoxFuture<'static, T> {
        (self.run)(args)
    }
}

/// Await `predicate`, then run and await exactly one of the branches with the
/// original argument.
pub fn if_else_async<A, R, P, PFut, T, TFut, E, EFut>(
    predicate: P,
    on_true: T,
    on_false: E,
) -> impl Fn(A) -> BoxFuture<'static, R>
where
    A: Clone + Send + 'static,
    R: Send + 'static,
    P: Fn(A) -> PFut,
    PFut: Future<Output = bool> + Send + 'static,
    T: Fn(A) -> TFut + Send + Sync + 'static,
    TFut: Future<Output = R> + Send + 'static,
    E: Fn(A) -> EFut + Send + Sync + 'static,
    EFut: Future<Output = R> + Send + 'static,
{
    let on_true = Arc::new(on_true);
    let on_false = Arc::new(on_false);
    move |args: A| {
        let verdict = predicate(args.clone());
        let on_true = Arc::clone(&on_true);
        let on_false = Arc::clone(&on_false);
        async move {
            if verdict.await {
                on_true(args).await
            } else {
                on_false(args).await
            }
        }
        .boxed()
    }
}
