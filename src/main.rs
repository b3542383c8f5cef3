use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use chexdiff::cli::{Action, Cli, USAGE, VERSION, report_error};
use chexdiff::hexdiff::compare;

fn main() {
    // 默认关闭日志，保证标准输出与标准错误的内容不受影响
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::from_args(env::args_os());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match cli.action() {
        Ok(Action::Help) => write!(out, "{USAGE}").map_err(anyhow::Error::from),
        Ok(Action::Version) => writeln!(out, "{VERSION}").map_err(anyhow::Error::from),
        Ok(Action::Compare { first, second }) => compare(&first, &second, &mut out),
        Err(err) => {
            // 提示写不出去时也只能按参数错误退出
            let _ = report_error(&err, &mut out, &mut io::stderr());
            let _ = out.flush();
            process::exit(err.exit_code());
        }
    };

    if let Err(e) = result.and_then(|()| out.flush().map_err(anyhow::Error::from)) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
