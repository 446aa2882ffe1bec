use crate::cli::parser::RequestCmd;
use crate::config::Config;
use crate::core::requests::RequestLogic;
use crate::errors::AppResult;
use crate::models::Request;
use crate::store::TableStore;
use crate::ui::messages::{confirm, info, success};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date::require_date;
use crate::utils::time::normalize_time;

const MESSAGE_WIDTH: usize = 72;

pub fn handle(cmd: &RequestCmd, cfg: &Config) -> AppResult<()> {
    let store = TableStore::open(cfg.layout())?;

    match cmd {
        RequestCmd::Add {
            date,
            time,
            name,
            message,
        } => {
            let request = Request {
                date: require_date(date)?.into(),
                time: normalize_time(time)?,
                name: name.trim().to_string(),
                message: message.clone(),
            };
            RequestLogic::add(&store, request)?;
            success("Request sent. The coach will confirm the booking.");
        }

        RequestCmd::List => {
            let requests: Vec<Request> = store.load();
            if requests.is_empty() {
                info("No pending requests.");
                return Ok(());
            }

            for (i, r) in requests.iter().enumerate() {
                println!(
                    "{CYAN}#{}{RESET} {} {} {}",
                    i + 1,
                    r.date,
                    r.time,
                    r.name
                );
                if r.message.trim().is_empty() {
                    println!("    {GREY}(no message){RESET}");
                } else {
                    let opts = textwrap::Options::new(MESSAGE_WIDTH)
                        .initial_indent("    ")
                        .subsequent_indent("    ");
                    println!("{}", textwrap::fill(r.message.trim(), opts));
                }
            }
            println!("{} request(s)", requests.len());
        }

        RequestCmd::Clear { yes } => {
            if !confirm("Delete every request? This action is irreversible.", *yes) {
                info("Operation cancelled.");
                return Ok(());
            }
            let n = RequestLogic::clear(&store)?;
            success(format!("Cleared {n} request(s)."));
        }
    }

    Ok(())
}
