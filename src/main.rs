// SPDX-License-Identifier: MPL-2.0
use ngurra_toasts::app::{self, paths, Flags};

const HELP: &str = "\
ngurra-toasts

USAGE:
  ngurra-toasts [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });

    for unknown in args.finish() {
        eprintln!("Ignoring unknown argument: {}", unknown.to_string_lossy());
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags { lang, config_dir })
}
