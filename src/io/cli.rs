//! Command-line shell for registering and authenticating with a password image

use crate::algorithm::matcher::MatchPolicy;
use crate::algorithm::session::{Authenticator, FlowConfig};
use crate::io::configuration::{
    DEFAULT_DATABASE_PATH, DEFAULT_SEGMENT_COUNT, EXIT_ERROR, EXIT_REJECTED, EXIT_SUCCESS,
    MSE_THRESHOLD,
};
use crate::io::error::Result;
use crate::io::image::load_rgb;
use crate::io::progress::StageSpinner;
use crate::storage::credentials::CredentialStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stripkey")]
#[command(
    author,
    version,
    about = "Graphical password authentication with image strips"
)]
/// Command-line arguments for the authentication shell
pub struct Cli {
    /// Credential database file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Number of vertical strips each image is cut into
    #[arg(short, long, default_value_t = DEFAULT_SEGMENT_COUNT)]
    pub segments: usize,

    /// Authentication passes when the summed strip error is below this value
    #[arg(short, long, default_value_t = MSE_THRESHOLD)]
    pub threshold: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-strip diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the shell
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a password image for a user, replacing any previous one
    Register {
        /// Username to register
        username: String,
        /// Password image file
        image: PathBuf,
    },
    /// Check a password image against a user's stored credential
    Authenticate {
        /// Username to authenticate
        username: String,
        /// Password image file
        image: PathBuf,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Flow configuration assembled from the arguments
    pub const fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            segment_count: self.segments,
            policy: MatchPolicy {
                threshold: self.threshold,
            },
        }
    }
}

/// Runs one shell command against the credential database
pub struct SessionShell {
    cli: Cli,
}

impl SessionShell {
    /// Create a shell for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// Returns `Ok(true)` when registration succeeds or authentication
    /// passes and `Ok(false)` when authentication is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, the image cannot
    /// be decoded, the username is blank or unknown, or the strips are not
    /// comparable
    pub fn process(&self) -> Result<bool> {
        let flow = match self.cli.command {
            Command::Register { .. } => "register",
            Command::Authenticate { .. } => "authenticate",
        };

        let spinner = self
            .cli
            .should_show_progress()
            .then(|| StageSpinner::start(flow));

        let outcome = self.run(spinner.as_ref());

        if let Some(s) = spinner {
            s.finish();
        }

        outcome
    }

    fn run(&self, spinner: Option<&StageSpinner>) -> Result<bool> {
        let stage = |message: &'static str| {
            if let Some(s) = spinner {
                s.stage(message);
            }
        };

        stage("opening credential store");
        let store = CredentialStore::open(&self.cli.database)?;
        let authenticator = Authenticator::new(store, self.cli.flow_config());

        match &self.cli.command {
            Command::Register { username, image } => {
                stage("decoding image");
                let pixels = load_rgb(image)?;
                stage("segmenting and storing");
                authenticator
                    .register_image(username, pixels.view())
                    .map(|_| true)
            }
            Command::Authenticate { username, image } => {
                stage("decoding image");
                let pixels = load_rgb(image)?;
                stage("comparing strips");
                authenticator.authenticate_image(username, pixels.view())
            }
        }
    }
}

/// How a finished command is reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Process exit status
    pub exit_status: u8,
    /// Line shown to the user
    pub message: String,
}

impl Summary {
    /// True when the message belongs on stderr
    pub const fn is_error(&self) -> bool {
        self.exit_status == EXIT_ERROR
    }
}

/// Map the outcome of `command` to an exit status and message
pub fn summarize(command: &Command, outcome: &Result<bool>) -> Summary {
    let (exit_status, message) = match (command, outcome) {
        (Command::Register { .. }, Ok(true)) => {
            (EXIT_SUCCESS, "Registration successful".to_string())
        }
        (Command::Authenticate { .. }, Ok(true)) => {
            (EXIT_SUCCESS, "Authentication successful".to_string())
        }
        (_, Ok(false)) => (EXIT_REJECTED, "Authentication failed".to_string()),
        (_, Err(e)) => (EXIT_ERROR, format!("Error: {e}")),
    };

    Summary {
        exit_status,
        message,
    }
}
