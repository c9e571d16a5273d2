use log::{debug, error, info};
use std::process::Command;

/// Desktop notification sink
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, urgent: bool);
}

/// Best-effort desktop notifications through the platform's command line tool.
/// Every notification is also logged, so nothing is lost where no tool exists.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    fn build_command(&self, title: &str, message: &str, urgent: bool) -> Option<Command> {
        if cfg!(target_os = "linux") {
            let mut command = Command::new("notify-send");
            command.args(["-a", self.app_name.as_str()]);
            if urgent {
                command.args(["-u", "critical"]);
            }
            command.args([title, message]);
            Some(command)
        } else if cfg!(target_os = "macos") {
            let script = format!(
                "display notification {:?} with title {:?}",
                message, title
            );
            let mut command = Command::new("osascript");
            command.args(["-e", script.as_str()]);
            Some(command)
        } else {
            None
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str, urgent: bool) {
        if urgent {
            error!("{}: {}", title, message);
        } else {
            info!("{}: {}", title, message);
        }

        let Some(mut command) = self.build_command(title, message, urgent) else {
            return;
        };

        if let Err(e) = command.status() {
            debug!("  (Notification failed: {})", e);
        }
    }
}
