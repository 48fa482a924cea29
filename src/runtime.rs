//! Runtime abstraction for the poll loop's tasks
//!
//! Tasks are spawned through a process-wide [`AsyncSpawner`] so the loop
//! does not name a runtime directly. The default spawner uses Tokio.

use crate::prelude::{Future, Pin};

pub type BoxedTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A trait for spawning async tasks (object-safe version)
pub trait AsyncSpawner: Send + Sync + 'static {
    /// Spawn a future and return a handle to it
    fn spawn_boxed(&self, future: BoxedTask) -> Box<dyn AsyncHandle>;
}

/// Handle to a spawned async task
pub trait AsyncHandle: Send + Sync {
    /// Check if the task is finished
    fn is_finished(&self) -> bool;

    /// Cancel the task
    fn cancel(&self);
}

/// Spawn a future on the global runtime
pub fn spawn<F>(future: F) -> Box<dyn AsyncHandle>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime().spawn_boxed(Box::pin(future))
}

pub mod spawners {
    use super::*;
    use ::tokio::task::JoinHandle;

    /// Spawns onto the ambient Tokio runtime
    pub struct TokioSpawner;

    impl AsyncSpawner for TokioSpawner {
        fn spawn_boxed(&self, future: BoxedTask) -> Box<dyn AsyncHandle> {
            Box::new(TokioHandle(::tokio::spawn(future)))
        }
    }

    struct TokioHandle(JoinHandle<()>);

    impl AsyncHandle for TokioHandle {
        fn is_finished(&self) -> bool {
            self.0.is_finished()
        }

        fn cancel(&self) {
            self.0.abort();
        }
    }
}

/// Global runtime instance
static RUNTIME: std::sync::OnceLock<Box<dyn AsyncSpawner>> = std::sync::OnceLock::new();

/// Install a spawner. Only the first call has an effect.
pub fn init_runtime(spawner: Box<dyn AsyncSpawner>) -> bool {
    let installed = RUNTIME.set(spawner).is_ok();
    if !installed {
        log::debug!("runtime already initialised, keeping the existing spawner");
    }
    installed
}

/// Get the global runtime spawner
pub fn runtime() -> &'static dyn AsyncSpawner {
    RUNTIME
        .get_or_init(|| Box::new(spawners::TokioSpawner))
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[::tokio::test]
    async fn test_tokio_spawner() {
        let handle = spawn(async {
            ::tokio::time::sleep(::tokio::time::Duration::from_millis(10)).await;
        });

        assert!(!handle.is_finished());

        ::tokio::time::sleep(::tokio::time::Duration::from_millis(50)).await;
        assert!(handle.is_finished());
    }

    #[test]
    fn test_first_spawner_wins() {
        let _ = runtime();
        assert!(!init_runtime(Box::new(spawners::TokioSpawner)));
    }

    #[::tokio::test]
    async fn test_cancel() {
        let handle = spawn(async {
            ::tokio::time::sleep(::tokio::time::Duration::from_secs(60)).await;
        });
        handle.cancel();

        ::tokio::time::sleep(::tokio::time::Duration::from_millis(20)).await;
        assert!(handle.is_finished());
    }
}
