use {
    coresat::{
        config::Config,
        solver::{Certificate, SatSolverIF, Solver},
        types::SolverError,
    },
    std::{
        fs::File,
        io::{BufWriter, Write},
        process::exit,
    },
    structopt::StructOpt,
};

fn main() {
    let config = Config::from_args();
    if 0 < config.verbose {
        println!("c coresat {}", env!("CARGO_PKG_VERSION"));
    }
    let mut solver = match Solver::build(&config) {
        Ok(s) => s,
        Err(e) => {
            println!("c ERROR! failed to load {}: {e}", config.cnf_file.display());
            exit(1);
        }
    };
    if 0 < config.verbose {
        println!("c Number of variables:  {}", solver.asg.num_vars);
        println!("c Number of clauses:    {}", solver.state.target.num_of_clauses);
    }
    match solver.solve() {
        Ok(Certificate::SAT(model)) => {
            println!("s SATISFIABLE");
            let mut line = model
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            line.push_str(" 0");
            println!("v {line}");
            save_result(&config, &line);
            exit(10);
        }
        Ok(Certificate::UNSAT) => {
            println!("s UNSATISFIABLE");
            save_result(&config, "");
            exit(20);
        }
        Err(e) => {
            if matches!(e, SolverError::OutOfMemory) {
                println!("c out of memory");
            }
            println!("s INDETERMINATE");
            exit(0);
        }
    }
}

fn save_result(config: &Config, line: &str) {
    if config.result_file.as_os_str().is_empty() {
        return;
    }
    match File::create(&config.result_file) {
        Ok(out) => {
            let mut buf = BufWriter::new(out);
            let body = if line.is_empty() {
                "s UNSATISFIABLE\n".to_string()
            } else {
                format!("s SATISFIABLE\nv {line}\n")
            };
            if let Err(why) = buf.write_all(body.as_bytes()) {
                println!("c ERROR! failed to save the result: {why}");
            }
        }
        Err(why) => println!("c ERROR! failed to create {}: {why}", config.result_file.display()),
    }
}
