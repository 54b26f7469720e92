//! Currying, partial application, composition and the small function builders
//! the rest of the crate leans on.
//!
//! Argument lists are explicit: a curried function collects a `Vec<A>` until
//! its arity is met, and a pipeline's entry stage takes a single `A` (use a
//! tuple when more than one value goes in).

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::trace;

type Shared<A, R> = Arc<dyn Fn(Vec<A>) -> R + Send + Sync>;

/// A function waiting for `arity` arguments.
///
/// Calling it never changes it: each call builds on a copy of the arguments
/// bound so far, so a partially applied value can be reused.
pub struct Curried<A, R> {
    func: Shared<A, R>,
    arity: usize,
    bound: Vec<A>,
}

/// Outcome of calling a [`Curried`].
pub enum Applied<A, R> {
    /// Enough arguments were supplied and the function ran.
    Ready(R),
    /// Still short of the arity; holds the combined arguments.
    Partial(Curried<A, R>),
}

/// Wrap `func` so that it runs once `arity` arguments have been collected.
///
/// Every call with at least the missing number of arguments invokes `func`
/// with the full ordered list, extras included. With an arity of zero the
/// first call always invokes.
pub fn curry<A, R, F>(func: F, arity: usize) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + Send + Sync + 'static,
{
    Curried { func: Arc::new(func), arity, bound: Vec::new() }
}

impl<A: Clone, R> Curried<A, R> {
    pub fn call<I>(&self, args: I) -> Applied<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut collected = self.bound.clone();
        collected.extend(args);
        trace!(arity = self.arity, supplied = collected.len(), "curried call");
        if collected.len() >= self.arity {
            Applied::Ready((self.func)(collected))
        } else {
            Applied::Partial(Self { func: Arc::clone(&self.func), arity: self.arity, bound: collected })
        }
    }
}

impl<A, R> Curried<A, R> {
    pub fn arity(&self) -> usize {
        self.arity
    }
    /// Arguments collected so far.
    pub fn bound(&self) -> &[A] {
        &self.bound
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self { func: Arc::clone(&self.func), arity: self.arity, bound: self.bound.clone() }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Curried").field("arity", &self.arity).field("bound", &self.bound).finish()
    }
}

impl<A, R> Applied<A, R> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Applied::Ready(_))
    }
    pub fn ready(self) -> Option<R> {
        match self {
            Applied::Ready(value) => Some(value),
            Applied::Partial(_) => None,
        }
    }
    pub fn into_partial(self) -> Option<Curried<A, R>> {
        match self {
            Applied::Ready(_) => None,
            Applied::Partial(curried) => Some(curried),
        }
    }
}

/// Bind `prefix` in front of whatever arguments the returned function gets.
///
/// Unlike [`curry`] there is no arity: every call forwards `prefix ++ args`.
pub fn partial<A, R, F>(func: F, prefix: Vec<A>) -> impl Fn(Vec<A>) -> R
where
    A: Clone,
    F: Fn(Vec<A>) -> R,
{
    move |args: Vec<A>| {
        let mut all = prefix.clone();
        all.extend(args);
        func(all)
    }
}

/// Bind the first argument of a two-argument function.
///
/// The bound value is cloned into every call, and the result is itself
/// `Clone` so binders nest.
pub fn partial1<A, B, R, F>(func: F, first: A) -> impl Fn(B) -> R + Clone
where
    A: Clone,
    F: Fn(A, B) -> R + Clone,
{
    move |second: B| func(first.clone(), second)
}

/// [`partial1`] for functions borrowing their second argument. The returned
/// function accepts a borrow of any lifetime, so it can be handed to
/// [`filter`](crate::collection::filter), [`map`](crate::collection::map)
/// and friends.
pub fn partial1_ref<A, B, R, F>(func: F, first: A) -> impl Fn(&B) -> R + Clone
where
    A: Clone,
    B: ?Sized,
    F: Fn(A, &B) -> R + Clone,
{
    move |second: &B| func(first.clone(), second)
}

/// A boxed single-argument stage of a pipeline.
pub type Unary<T> = Box<dyn Fn(T) -> T + Send + Sync>;

pub fn unary<T, F>(func: F) -> Unary<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Box::new(func)
}

/// Run `head` on the entry argument, then thread its output through `rest`
/// from left to right. Every stage after the head keeps the type; use
/// [`Pipeline`] or [`pipe!`] when stages convert.
pub fn pipe<A, T, H>(head: H, rest: Vec<Unary<T>>) -> impl Fn(A) -> T
where
    H: Fn(A) -> T,
{
    move |args: A| rest.iter().fold(head(args), |value, stage| stage(value))
}

/// Right-to-left [`pipe`]: `compose([f1, f2], f3)(x) == f1(f2(f3(x)))`.
pub fn compose<A, T, H>(outer: Vec<Unary<T>>, inner: H) -> impl Fn(A) -> T
where
    H: Fn(A) -> T,
{
    let mut outer = outer;
    outer.reverse();
    pipe(inner, outer)
}

/// A left-to-right chain whose stages may change the value's type.
///
/// ```
/// use fpkit::combinator::Pipeline;
///
/// let describe = Pipeline::new(|raw: &'static str| raw.trim().parse::<i64>().unwrap_or_default())
///     .then(|n| n * 2)
///     .then(|n: i64| format!("{n} items"));
/// assert_eq!(describe.call(" 21 "), "42 items");
/// ```
pub struct Pipeline<A, T> {
    run: Box<dyn Fn(A) -> T + Send + Sync>,
}

impl<A: 'static, T: 'static> Pipeline<A, T> {
    pub fn new<H>(head: H) -> Self
    where
        H: Fn(A) -> T + Send + Sync + 'static,
    {
        Self { run: Box::new(head) }
    }

    /// Feed this pipeline's result into `stage`.
    pub fn then<U, F>(self, stage: F) -> Pipeline<A, U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let run = self.run;
        Pipeline { run: Box::new(move |args: A| stage(run(args))) }
    }

    pub fn call(&self, args: A) -> T {
        (self.run)(args)
    }

    pub fn into_fn(self) -> impl Fn(A) -> T {
        move |args: A| (self.run)(args)
    }
}

/// Left-to-right composition of any number of functions, each free to change
/// the type: `pipe!(f, g, h)(x) == h(g(f(x)))`.
#[macro_export]
macro_rules! pipe {
    ($head:expr $(,)?) => {
        $head
    };
    ($head:expr, $($rest:expr),+ $(,)?) => {{
        let head = $head;
        let rest = $crate::pipe!($($rest),+);
        move |args| rest(head(args))
    }};
}

/// Right-to-left [`pipe!`]: `compose!(f, g, h)(x) == f(g(h(x)))`.
#[macro_export]
macro_rules! compose {
    ($inner:expr $(,)?) => {
        $inner
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |args| outer(inner(args))
    }};
}

/// Pick a branch by `predicate`; the chosen branch receives the original
/// argument. Only one branch runs per call.
pub fn if_else<A, R, P, T, E>(predicate: P, on_true: T, on_false: E) -> impl Fn(A) -> R
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> R,
    E: Fn(A) -> R,
{
    move |args: A| if predicate(&args) { on_true(args) } else { on_false(args) }
}

/// Run `func` on the first call only; later calls return a clone of the
/// cached result and ignore their argument.
pub fn once<A, R, F>(func: F) -> impl Fn(A) -> R
where
    R: Clone,
    F: Fn(A) -> R,
{
    let value = OnceLock::new();
    move |args: A| value.get_or_init(|| func(args)).clone()
}

/// A constant producer: the returned function always yields `value`.
pub fn identity<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

pub fn not(value: bool) -> bool {
    !value
}

/// Predicate negation.
pub fn negate<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Fn(A) -> bool,
{
    move |args: A| !predicate(args)
}
