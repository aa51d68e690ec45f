use crate::FailResult;
use crate::cmd;
use crate::ui::cli_deserialize::CliDeserialize;
use crate::ui::logging::GlobalLogger;
use crate::ui::parse::{parse_number, parse_v3};

use cellmetric_array_types::V3;
use cellmetric_config::{ValidatedSettings, YamlRead};
use cellmetric_lattice::{Crystal, LatticeSystem, SystemKind};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::ffi::OsStr;
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        ::std::process::exit(1);
    });
}

/// Options that come before the subcommand.
struct GlobalArgs {
    config: Option<PathBuf>,
    log: Option<PathBuf>,
    verbose: bool,
}

impl CliDeserialize for GlobalArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("config")
                .short("c").long("config").value_name("FILE").takes_value(true)
                .help("settings yaml (thresholds and output format)"),
            Arg::with_name("log")
                .long("log").value_name("FILE").takes_value(true)
                .help("also write log messages to this file"),
            Arg::with_name("verbose")
                .short("v").long("verbose")
                .help("show trace-level messages from cellmetric"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self>
    { Ok(GlobalArgs {
        config: m.value_of_os("config").map(PathBuf::from),
        log: m.value_of_os("log").map(PathBuf::from),
        verbose: m.is_present("verbose"),
    })}
}

impl GlobalArgs {
    fn init_logger(&self) -> FailResult<()> {
        let mut logger = GlobalLogger::default();
        logger.verbose(self.verbose);
        if let Some(path) = &self.log {
            logger.path(path);
        }
        logger.apply()
    }

    fn read_settings(&self) -> FailResult<ValidatedSettings> {
        match &self.config {
            None => Ok(ValidatedSettings::default()),
            Some(path) => {
                debug!("reading settings from {}", path.display());
                let file = path_abs::FileRead::open(path)?;
                Ok(YamlRead::from_reader(file)?)
            },
        }
    }
}

/// `SYSTEM PARAM...`, with angles in degrees.
struct CellArgs {
    system: LatticeSystem,
}

impl CliDeserialize for CellArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("system")
                .required(true)
                .help("triclinic, monoclinic, orthorhombic, tetragonal, hexagonal, rhombohedral, or cubic"),
            Arg::with_name("params")
                .required(true).multiple(true).allow_hyphen_values(true)
                .help("\
                    the independent cell parameters of SYSTEM, in order: \
                    triclinic: a b c alpha beta gamma; monoclinic: a b c beta; \
                    orthorhombic: a b c; tetragonal: a c; hexagonal: a c; \
                    rhombohedral: a alpha; cubic: a. \
                    Angles are in degrees.\
                "),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let kind: SystemKind = m.value_of("system").unwrap_or_default().parse()?;
        let values = m.values_of("params").into_iter().flatten()
            .map(parse_number)
            .collect::<FailResult<Vec<_>>>()?;
        let system = cmd::system_from_cli_values(kind, &values)?;
        Ok(CellArgs { system })
    }
}

/// `--p X,Y,Z [--q X,Y,Z] [--reciprocal]`
struct VectorArgs {
    p: V3,
    q: Option<V3>,
    reciprocal: bool,
}

impl CliDeserialize for VectorArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("p")
                .long("p").value_name("X,Y,Z").takes_value(true)
                .required(true).allow_hyphen_values(true)
                .help("a vector in fractional coordinates"),
            Arg::with_name("q")
                .long("q").value_name("X,Y,Z").takes_value(true)
                .allow_hyphen_values(true)
                .help("a second vector; enables the dot product, distance and angle"),
            Arg::with_name("reciprocal")
                .long("reciprocal")
                .help("the vectors are in the reciprocal basis (e.g. Miller indices)"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let p = parse_v3(m.value_of("p").unwrap_or_default())?;
        let q = match m.value_of("q") {
            Some(s) => Some(parse_v3(s)?),
            None => None,
        };
        let reciprocal = m.is_present("reciprocal");
        Ok(VectorArgs { p, q, reciprocal })
    }
}

fn build_crystal(system: LatticeSystem, settings: &ValidatedSettings) -> FailResult<Crystal> {
    let ValidatedSettings(settings) = settings;
    let crystal = Crystal::with_thresholds(system, settings.thresholds)?;
    info!("{} cell, volume {:e}", crystal.name(), crystal.volume());
    Ok(crystal)
}

pub fn cellmetric() {
    wrap_result_main(|| {
        let (tensor_app, tensor_de) = CellArgs::augment_clap_app({
            SubCommand::with_name("tensor")
                .about("print the direct and reciprocal metric tensors of a cell")
        });
        let (geometry_app, geometry_de) = <(CellArgs, VectorArgs)>::augment_clap_app({
            SubCommand::with_name("geometry")
                .about("measure lattice vectors: lengths, dot products, distances and angles")
        });
        let (app, global_de) = GlobalArgs::augment_clap_app({
            App::new("cellmetric")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Metric tensors of the seven lattice systems.")
                .setting(AppSettings::SubcommandRequiredElseHelp)
        });
        let matches = app.subcommand(tensor_app).subcommand(geometry_app).get_matches();

        let global = global_de.resolve_args(&matches)?;
        global.init_logger()?;
        let settings = global.read_settings()?;
        let output = &(settings.0).output;

        match matches.subcommand() {
            ("tensor", Some(m)) => {
                let CellArgs { system } = tensor_de.resolve_args(m)?;
                let crystal = build_crystal(system, &settings)?;
                cmd::check_inverse(&crystal);
                print!("{}", cmd::tensor_report(&crystal, output)?);
            },
            ("geometry", Some(m)) => {
                let (CellArgs { system }, VectorArgs { p, q, reciprocal }) = geometry_de.resolve_args(m)?;
                let crystal = build_crystal(system, &settings)?;
                print!("{}", cmd::geometry_report(&crystal, output, &p, q.as_ref(), reciprocal)?);
            },
            (name, _) => bail!("unknown subcommand {:?}", name),
        }
        Ok(())
    });
}
