use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// How bytes received from the device are turned into console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Decode as UTF-8; anything else is a fatal decode error.
    #[default]
    Strict,
    /// Replace non-printable bytes with escape sequences.
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Relay the decoded line as-is.
    #[default]
    Plain,
    /// Emit one `SerialEvent` JSON object per line.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub path: String,
    pub baud_rate: u32,
    pub render: RenderMode,
    pub output: OutputFormat,
    pub verbose: bool,
}

impl BridgeConfig {
    pub fn new(path: &str, baud_rate: u32) -> Self {
        Self {
            path: path.to_string(),
            baud_rate,
            render: RenderMode::default(),
            output: OutputFormat::default(),
            verbose: false,
        }
    }

    pub fn with_render(mut self, render: RenderMode) -> Self {
        self.render = render;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        // Both positionals are required, clap rejects the invocation before we get here
        let path = matches
            .get_one::<String>("device")
            .cloned()
            .unwrap_or_default();
        let baud_rate = matches.get_one::<u32>("baud").copied().unwrap_or_default();

        let render = if matches.get_flag("escape") {
            RenderMode::Escape
        } else {
            RenderMode::Strict
        };
        let output = if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        };

        Self {
            path,
            baud_rate,
            render,
            output,
            verbose: matches.get_flag("verbose"),
        }
    }
}

pub fn command() -> Command {
    Command::new("serial_bridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Forward stdin lines to a serial device and print the lines it sends back")
        .arg(
            Arg::new("device")
                .help("Serial device path, e.g. /dev/ttyUSB0")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("baud")
                .help("Baud rate")
                .required(true)
                .index(2)
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("escape")
                .long("escape")
                .help("Print non-printable bytes as escape sequences instead of failing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON event per line")
                .action(ArgAction::SetTrue),
        )
}
