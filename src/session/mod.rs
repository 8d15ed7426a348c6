//! Dev session
//!
//! After a successful first build elm-live keeps running: it launches the
//! static server, optionally opens the browser, and watches the sources,
//! asking its caller to rebuild whenever they change. Ctrl+C ends it.

mod browser;
mod event;
mod server;
mod watch;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, WatchConfig};
use crate::error::{LiveError, LiveResult};

pub use browser::{open_browser, opener_command};
pub use event::SessionEvent;
pub use server::{expand_template, CommandServer};
pub use watch::ChangeFilter;

/// Time given to the server to fail fast (port taken, bad flags).
const SERVER_GRACE: Duration = Duration::from_millis(200);

/// Everything a supervisor needs to run one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    pub root: PathBuf,
    pub watch: WatchConfig,
    /// Expanded server command; empty means no server
    pub server_command: Vec<String>,
    pub url: String,
    pub open: bool,
}

impl SessionPlan {
    pub fn new(config: &Config, root: &Path, open: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            watch: config.watch.clone(),
            server_command: expand_template(
                &config.server.command,
                config.server.port,
                &config.server.host,
                &config.server.dir,
            ),
            url: config.server_url(),
            open,
        }
    }
}

/// Runs a dev session until it is interrupted.
pub trait Supervisor {
    /// Block until the session ends. Every [`SessionEvent`] is handed to
    /// `on_event`, including the change batches that call for a rebuild.
    fn supervise(
        &self,
        plan: &SessionPlan,
        on_event: &mut dyn FnMut(SessionEvent),
    ) -> LiveResult<()>;
}

/// Real processes, real filesystem events, Ctrl+C to stop.
#[derive(Debug, Clone)]
pub struct LiveSupervisor {
    running: Arc<AtomicBool>,
}

impl Default for LiveSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveSupervisor {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Flag the watch loop polls; clearing it ends the session.
    pub fn running(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    fn install_interrupt_handler(&self) -> LiveResult<()> {
        let running = self.running();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })
        .map_err(|e| LiveError::Watch(format!("could not install Ctrl+C handler: {}", e)))
    }

    fn start_server(
        &self,
        plan: &SessionPlan,
        on_event: &mut dyn FnMut(SessionEvent),
    ) -> Option<CommandServer> {
        if plan.server_command.is_empty() {
            return None;
        }

        match CommandServer::spawn(&plan.server_command, &plan.root) {
            Ok(mut server) => {
                std::thread::sleep(SERVER_GRACE);
                match server.exited() {
                    Some(status) => {
                        on_event(SessionEvent::Warning {
                            message: format!(
                                "server `{}` exited with status {}",
                                plan.server_command.join(" "),
                                status
                            ),
                        });
                        None
                    }
                    None => {
                        on_event(SessionEvent::ServerStarted {
                            url: plan.url.clone(),
                        });
                        Some(server)
                    }
                }
            }
            Err(e) => {
                on_event(SessionEvent::Warning {
                    message: e.to_string(),
                });
                None
            }
        }
    }
}

impl Supervisor for LiveSupervisor {
    fn supervise(
        &self,
        plan: &SessionPlan,
        on_event: &mut dyn FnMut(SessionEvent),
    ) -> LiveResult<()> {
        self.install_interrupt_handler()?;

        let filter = ChangeFilter::new(&plan.root, &plan.watch)?;

        let server = self.start_server(plan, on_event);

        if plan.open {
            match open_browser(&plan.url) {
                Ok(()) => on_event(SessionEvent::BrowserOpened {
                    url: plan.url.clone(),
                }),
                Err(e) => on_event(SessionEvent::Warning {
                    message: e.to_string(),
                }),
            }
        }

        let result = watch::watch_loop(
            &filter,
            Duration::from_millis(plan.watch.debounce_ms),
            &self.running,
            on_event,
        );

        drop(server);
        on_event(SessionEvent::Shutdown);
        result
    }
}
