//! Fixed-size worker pool that runs render tasks.
//!
//! Workers pull boxed closures from a shared FIFO queue guarded by one mutex
//! and two condition variables: `available` wakes idle workers when work
//! arrives, `exhausted` wakes callers of [`ThreadPool::wait_for_tasks`] when
//! every submitted task has finished.
//!
//! Tasks are not isolated from each other. A panicking task is treated as
//! fatal and aborts the process.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use lumen_core::DynArray;
use parking_lot::{Condvar, Mutex};

use crate::error::{RenderError, RenderResult};

type Task = Box<dyn FnOnce() + Send + 'static>;

struct QueueState {
    tasks: DynArray<Task>,
    running: bool,
    submitted: u64,
    completed: u64,
}

impl QueueState {
    /// True once nothing is left to wait for.
    ///
    /// While running that means every submitted task completed. After a stop
    /// request, queued tasks will never run, so only in-flight ones count.
    fn is_settled(&self) -> bool {
        let outstanding = self.submitted - self.completed;
        if self.running {
            outstanding == 0
        } else {
            outstanding == self.tasks.len() as u64
        }
    }
}

struct Shared {
    state: Mutex<QueueState>,
    available: Condvar,
    exhausted: Condvar,
}

/// A pool of worker threads consuming a shared task queue.
pub struct ThreadPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl ThreadPool {
    /// Spawn `num_threads` workers.
    ///
    /// If a spawn fails, the workers already started are stopped and joined
    /// before the error is returned.
    pub fn new(num_threads: usize) -> RenderResult<Self> {
        if num_threads == 0 {
            return Err(RenderError::InvalidConfig(
                "thread pool needs at least one worker".into(),
            ));
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(QueueState {
                tasks: DynArray::new(),
                running: true,
                submitted: 0,
                completed: 0,
            }),
            available: Condvar::new(),
            exhausted: Condvar::new(),
        });

        let mut pool = Self {
            shared,
            workers: Vec::with_capacity(num_threads),
        };

        for id in 0..num_threads {
            let shared = Arc::clone(&pool.shared);
            let handle = thread::Builder::new()
                .name(format!("lumen-worker-{id}"))
                .spawn(move || worker_loop(id, &shared))?;
            pool.workers.push(handle);
        }

        log::debug!("Started thread pool with {} workers", num_threads);
        Ok(pool)
    }

    /// Number of worker threads.
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Number of tasks waiting to be picked up.
    pub fn queued(&self) -> usize {
        self.shared.state.lock().tasks.len()
    }

    /// Queue a task and wake one idle worker.
    pub fn add_task<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.shared.state.lock();
        if !state.running {
            log::warn!("Task submitted after stop was requested; it will not run");
        }
        state.tasks.push(Box::new(task));
        state.submitted += 1;
        drop(state);

        self.shared.available.notify_one();
    }

    /// Block until every task submitted so far has finished.
    ///
    /// Tasks may be submitted from other threads while a wait is in
    /// progress; the wait then also covers them. After
    /// [`ThreadPool::request_stop`] it only waits for tasks already running.
    pub fn wait_for_tasks(&self) {
        let mut state = self.shared.state.lock();
        while !state.is_settled() {
            self.shared.exhausted.wait(&mut state);
        }
    }

    /// Stop workers from picking up further tasks, without joining them.
    ///
    /// Tasks already running finish normally.
    pub fn request_stop(&self) {
        self.shared.state.lock().running = false;
        self.shared.available.notify_all();
        self.shared.exhausted.notify_all();
    }

    /// Stop and join every worker, dropping tasks that never started.
    ///
    /// Returns how many queued tasks were discarded.
    pub fn destroy(mut self) -> usize {
        self.shutdown()
    }

    fn shutdown(&mut self) -> usize {
        self.request_stop();

        let joined = self.workers.len();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("Worker thread exited by panic");
            }
        }

        let discarded = self.shared.state.lock().tasks.clear();
        if discarded > 0 {
            log::warn!("Discarded {} queued tasks on shutdown", discarded);
        }
        log::debug!("Thread pool stopped, {} workers joined", joined);
        discarded
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        if !self.workers.is_empty() {
            self.shutdown();
        }
    }
}

fn worker_loop(id: usize, shared: &Shared) {
    log::trace!("Worker {} running", id);

    loop {
        let task = {
            let mut state = shared.state.lock();
            loop {
                if !state.running {
                    log::trace!("Worker {} stopping", id);
                    return;
                }
                if let Some(task) = state.tasks.pop_front() {
                    break task;
                }
                shared.available.wait(&mut state);
            }
        };

        // Run outside the lock
        if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
            log::error!("Task panicked on worker {}, aborting", id);
            std::process::abort();
        }

        let mut state = shared.state.lock();
        state.completed += 1;
        if state.is_settled() {
            shared.exhausted.notify_all();
        }
    }
}
