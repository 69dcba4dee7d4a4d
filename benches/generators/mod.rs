mod stateful;
mod stateless;

pub use stateful::bench_stateful;
pub use stateless::bench_stateless;
