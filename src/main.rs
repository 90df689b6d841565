// SPDX-License-Identifier: MPL-2.0
use iced_flipbook::app::{self, paths, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Usage: iced_flipbook [OPTIONS] [ALBUM_DIR]

Options:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --album-dir <DIR>    Folder holding 1.jpg..12.jpg, the music and the PDF
  --config-dir <DIR>   Folder holding settings.toml
  --i18n-dir <DIR>     Extra Fluent .ftl translations
  -h, --help           Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let mut album_dir: Option<String> = args.opt_value_from_str("--album-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;

    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let unknown: Vec<String> = rest
        .iter()
        .filter(|arg| arg.starts_with('-'))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(unknown));
    }

    let positional = rest.into_iter().next();
    if album_dir.is_none() {
        album_dir = positional;
    }

    Ok(Some(Flags {
        lang,
        album_dir,
        config_dir,
        i18n_dir,
    }))
}

fn main() -> ExitCode {
    iced_flipbook::logging::init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(flags.album_dir.clone(), flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Flags>, pico_args::Error> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn positional_argument_is_album_dir() {
        let flags = parse(&["photos"]).expect("valid").expect("not help");
        assert_eq!(flags.album_dir.as_deref(), Some("photos"));
    }

    #[test]
    fn album_dir_flag_beats_positional() {
        let flags = parse(&["--album-dir", "a", "b"])
            .expect("valid")
            .expect("not help");
        assert_eq!(flags.album_dir.as_deref(), Some("a"));
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        match parse(&["--albm-dir", "x"]) {
            Err(pico_args::Error::UnusedArgsLeft(left)) => {
                assert_eq!(left, vec!["--albm-dir".to_string()]);
            }
            Err(other) => panic!("expected UnusedArgsLeft, got {other}"),
            Ok(flags) => panic!("expected an error, got {:?}", flags.is_some()),
        }
    }

    #[test]
    fn help_flag_short_circuits() {
        assert!(parse(&["--help"]).expect("valid").is_none());
        assert!(parse(&["-h", "--bogus"]).expect("valid").is_none());
    }
}
