// SPDX-License-Identifier: MPL-2.0
use panlens::app::{self, paths, Flags};

const HELP: &str = "\
panlens: image preview with a horizontally panning 16:9 view

USAGE:
  panlens [OPTIONS] [FILE]

OPTIONS:
  -h, --help              Print this help
      --lang <LOCALE>     Interface language (e.g. en-US, fr)
      --i18n-dir <DIR>    Directory with .ftl files overriding translations
      --config-dir <DIR>  Directory holding settings.toml

ENV:
  PANLENS_CONFIG_DIR      Config directory, used when --config-dir is absent
  RUST_LOG                Log filter (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        i18n_dir,
        config_dir,
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
