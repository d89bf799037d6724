// src/main.rs

//! Command-line front end: print strings, or refresh an arbitrary region.

use anyhow::{bail, Context, Result};
use env_logger::Env;
use log::{error, info};

use inkfb::{Config, PrintConfig, Rect, Session};

fn show_help() {
    println!(
        "\ninkfb {}\n\n\
         Usage: inkfb [OPTIONS] [STRING ...]\n\n\
         Print STRING on your device's eInk screen.\n\n\
         Example: inkfb -x 1 -y 10 \"Hello World!\"\n\n\
         Options affecting the message's position on screen:\n\
         \t-x, --col NUM\tBegin printing STRING @ column NUM (default: 0).\n\
         \t-y, --row NUM\tBegin printing STRING @ row NUM (default: 0).\n\
         \t\t\tNegative values count back from the far edge.\n\
         \t-m, --centered\tDynamically override col to center STRING.\n\
         \t-p, --padded\tPad STRING with blank spaces up to the line width.\n\n\
         Options affecting the message's appearance:\n\
         \t-h, --invert\tPrint STRING white-on-black instead of the reverse.\n\
         \t-f, --flash\tAsk the eInk driver for a black flash on refresh.\n\
         \t-c, --clear\tFully clear the screen before printing (obeys --invert).\n\n\
         Each additional STRING is printed on the next row.\n\n\
         You can also skip printing entirely and just refresh a region:\n\
         \t-s, --refresh top=NUM,left=NUM,width=NUM,height=NUM,wfm=NAME\n\
         \t\tThis also honors --flash.\n",
        inkfb::version()
    );
}

#[derive(Debug, Default)]
struct RefreshSpec {
    top: u32,
    left: u32,
    width: u32,
    height: u32,
    wfm: Option<String>,
}

impl RefreshSpec {
    /// Parses the `top=,left=,width=,height=,wfm=` suboption list.
    fn parse(subopts: &str) -> Result<Self> {
        let mut spec = RefreshSpec::default();
        for part in subopts.split(',').filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .with_context(|| format!("suboption {part:?} has no value"))?;
            match key {
                "top" => spec.top = value.parse().context("bad top value")?,
                "left" => spec.left = value.parse().context("bad left value")?,
                "width" => spec.width = value.parse().context("bad width value")?,
                "height" => spec.height = value.parse().context("bad height value")?,
                "wfm" => spec.wfm = Some(value.to_string()),
                other => bail!("no match found for token {other:?}"),
            }
        }
        if spec.width == 0 && spec.height == 0 && spec.wfm.is_none() {
            bail!("must specify at least width, height and wfm");
        }
        Ok(spec)
    }
}

#[derive(Debug, Default)]
struct Cli {
    print: PrintConfig,
    refresh: Option<RefreshSpec>,
    strings: Vec<String>,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = std::ffi::OsString>) -> Result<Cli> {
    let mut cli = Cli::default();
    let mut args = args.map(|a| a.to_string_lossy().into_owned());

    // Pulls the value for an option taking one, accepting both
    // "--opt value" and "--opt=value".
    fn value_of(
        opt: &str,
        inline: Option<&str>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<String> {
        match inline {
            Some(v) => Ok(v.to_string()),
            None => args
                .next()
                .with_context(|| format!("option {opt} requires a value")),
        }
    }

    while let Some(arg) = args.next() {
        let (opt, inline) = match arg.split_once('=') {
            Some((o, v)) if arg.starts_with("--") => (o.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };
        match opt.as_str() {
            "-y" | "--row" => {
                cli.print.row = value_of(&opt, inline.as_deref(), &mut args)?
                    .parse()
                    .context("bad row value")?;
            }
            "-x" | "--col" => {
                cli.print.col = value_of(&opt, inline.as_deref(), &mut args)?
                    .parse()
                    .context("bad col value")?;
            }
            "-h" | "--invert" => cli.print.inverted = true,
            "-f" | "--flash" => cli.print.flashing = true,
            "-c" | "--clear" => cli.print.cleared = true,
            "-m" | "--centered" => cli.print.centered = true,
            "-p" | "--padded" => cli.print.padded = true,
            "--help" => cli.help = true,
            "-s" | "--refresh" => {
                let subopts = value_of(&opt, inline.as_deref(), &mut args)?;
                cli.refresh = Some(RefreshSpec::parse(&subopts)?);
            }
            _ if opt.starts_with('-') && opt.len() > 1 => {
                bail!("unknown option {opt:?}");
            }
            _ => cli.strings.push(arg),
        }
    }
    Ok(cli)
}

fn run(cli: Cli) -> Result<()> {
    if cli.help || (cli.strings.is_empty() && cli.refresh.is_none()) {
        show_help();
        return Ok(());
    }

    let mut session = Session::open(&Config::default())?;

    if !cli.strings.is_empty() {
        let mut config = cli.print;
        let mut failed = false;
        for string in &cli.strings {
            info!(
                "printing {:?} @ column {}, row {} (inverted: {}, flashing: {}, centered: {}, padded: {}, cleared: {})",
                string,
                config.col,
                config.row,
                config.inverted,
                config.flashing,
                config.centered,
                config.padded,
                config.cleared
            );
            if let Err(err) = session.print(string, &config) {
                error!("failed to print {string:?}: {err:#}");
                failed = true;
            }
            // Consecutive strings land on consecutive rows.
            config.row += 1;
        }
        if failed {
            bail!("one or more strings failed to print");
        }
    } else if let Some(spec) = &cli.refresh {
        let wfm = spec.wfm.as_deref().unwrap_or("AUTO");
        info!(
            "refreshing top={}, left={}, width={}, height={} with {}waveform mode {}",
            spec.top,
            spec.left,
            spec.width,
            spec.height,
            if cli.print.flashing { "a flashing " } else { "" },
            wfm
        );
        let rect = Rect::new(spec.top, spec.left, spec.width, spec.height);
        session
            .refresh(rect, wfm, cli.print.flashing)
            .context("failed to refresh the screen as specified")?;
    }

    session.teardown()
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match parse_args(std::env::args_os().skip(1)) {
        Ok(cli) => cli,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
