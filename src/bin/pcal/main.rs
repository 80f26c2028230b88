mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use persian_calendar::{Converter, GregorianDate, PersianCalendar, PersianDate, day_name};
use tracing::info;

use crate::cli::{CalArgs, Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug == 1);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut converter = Converter::new();
    converter
        .set_debug(cli.debug)
        .context("invalid --debug value")?;

    match cli.command {
        Command::Today => {
            let today = PersianCalendar::today()?.with_converter(converter);
            println!("{today} ({})", today.day_name());
        }
        Command::ToGregorian(args) => {
            let date: PersianDate = args
                .date
                .parse()
                .with_context(|| format!("parsing Persian date {:?}", args.date))?;
            println!("{}", converter.to_gregorian(date)?);
        }
        Command::FromGregorian(args) => {
            let date: GregorianDate = args
                .date
                .parse()
                .with_context(|| format!("parsing Gregorian date {:?}", args.date))?;
            let persian = converter.from_gregorian(date)?;
            let weekday = day_name(converter.day_of_week(persian)).unwrap_or_default();
            println!("{persian} ({weekday})");
        }
        Command::Cal(args) => print!("{}", month_grid(converter, args)?),
        Command::Leap(args) => {
            let verdict = if converter.is_leap(args.year)? {
                "is"
            } else {
                "is not"
            };
            println!("{} {verdict} a leap year", args.year);
        }
    }
    Ok(())
}

fn month_grid(converter: Converter, args: CalArgs) -> Result<String> {
    let year = match args.year {
        Some(year) => year,
        None => i32::from(PersianCalendar::today()?.year()),
    };
    let grid = match args.month {
        Some(month) => converter
            .month_grid_named(year, &month)
            .with_context(|| format!("month {month:?}"))?,
        None => converter.month_grid(year, i32::from(PersianCalendar::today()?.month()))?,
    };
    info!(year, month = grid.month().get(), "rendering month");
    Ok(grid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cal(year: Option<i32>, month: Option<&str>) -> CalArgs {
        CalArgs {
            year,
            month: month.map(str::to_owned),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cal_with_month_name() {
        let cli = Cli::try_parse_from(["pcal", "cal", "1390", "Farvardin"]).unwrap();
        assert_eq!(cli.debug, 0);
        match cli.command {
            Command::Cal(args) => {
                assert_eq!(args.year, Some(1390));
                assert_eq!(args.month.as_deref(), Some("Farvardin"));
            }
            _ => panic!("expected the cal subcommand"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["pcal", "-vv", "leap", "1391", "--debug", "1"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.debug, 1);
        assert!(matches!(cli.command, Command::Leap(ref args) if args.year == 1391));
    }

    #[test]
    fn test_run_rejects_bad_debug_value() {
        let cli = Cli::try_parse_from(["pcal", "leap", "1390", "--debug", "2"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("--debug"), "{err}");
    }

    #[test]
    fn test_month_grid_by_name_and_number() {
        let by_name = month_grid(Converter::new(), cal(Some(1390), Some("Farvardin"))).unwrap();
        let by_number = month_grid(Converter::new(), cal(Some(1390), Some("1"))).unwrap();
        assert_eq!(by_name, by_number);
        assert!(by_name.starts_with("Farvardin 1390\n"));
    }

    #[test]
    fn test_month_grid_rejects_bad_month() {
        let err = month_grid(Converter::new(), cal(Some(1390), Some("Brumaire"))).unwrap_err();
        assert!(err.to_string().contains("Brumaire"), "{err}");
        assert!(month_grid(Converter::new(), cal(Some(1390), Some("13"))).is_err());
        assert!(month_grid(Converter::new(), cal(Some(0), Some("1"))).is_err());
    }

    #[test]
    fn test_month_grid_defaults_to_current_month() {
        let today = PersianCalendar::today().unwrap();
        let rendered = month_grid(Converter::new(), cal(None, None)).unwrap();
        assert_eq!(rendered, today.month_grid().to_string());
    }
}
