/// Crate `config` provides solver's configuration and CLI.
use {std::path::PathBuf, structopt::StructOpt};

/// Configuration built from command line options
#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "coresat", about, author)]
pub struct Config {
    //
    //## I/O configuration
    //
    /// CNF file in DIMACS format
    #[structopt(parse(from_os_str))]
    pub cnf_file: PathBuf,

    /// Result filename/stdout
    #[structopt(long = "result", short = "r", default_value = "", parse(from_os_str))]
    pub result_file: PathBuf,

    /// Verbosity level (0=silent, 1=some, 2=more)
    #[structopt(long = "verb", default_value = "1")]
    pub verbose: usize,

    //
    //## resource limits
    //
    /// CPU time limit in sec. (0 for no limit)
    #[structopt(long = "cpu-lim", default_value = "0.0")]
    pub cpu_lim: f64,

    /// Memory budget in MiB (0 for no limit)
    #[structopt(long = "mem-lim", default_value = "0")]
    pub mem_lim: usize,

    //
    //## search configuration
    //
    /// The variable activity decay factor
    #[structopt(long = "var-decay", default_value = "0.95")]
    pub var_decay: f64,

    /// The clause activity decay factor
    #[structopt(long = "cla-decay", default_value = "0.999")]
    pub cla_decay: f64,

    /// Luby restart sequence switch
    #[structopt(long = "luby", default_value = "1")]
    pub luby_restart: i32,

    /// Wasted fraction of the clause arena triggering garbage collection
    #[structopt(long = "gc-frac", default_value = "0.20")]
    pub garbage_frac: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cnf_file: PathBuf::new(),
            result_file: PathBuf::new(),
            verbose: 0,
            cpu_lim: 0.0,
            mem_lim: 0,
            var_decay: 0.95,
            cla_decay: 0.999,
            luby_restart: 1,
            garbage_frac: 0.20,
        }
    }
}

impl<T> From<T> for Config
where
    PathBuf: From<T>,
{
    fn from(path: T) -> Config {
        Config {
            cnf_file: PathBuf::from(path),
            ..Config::default()
        }
    }
}

macro_rules! dispatch {
    // from `0` and `1`
    ($field: expr) => {
        0 != $field
    };
}

impl Config {
    pub fn use_luby(&self) -> bool {
        dispatch!(self.luby_restart)
    }
}
