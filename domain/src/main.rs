use std::env;
use std::process;

use domain::adapters::memory_repo::InMemoryUserRepo;
use domain::service::UserService;
use domain::validate::parse_user_id;
use domain::{CoreError, NewUser, User};

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  domain users list\n  domain users get <id>\n  domain users create <name> <email>\n\nNotes:\n  - This demo CLI uses a freshly seeded in-memory store; data is not persisted across runs.",
        domain::about()
    );
}

fn print_user(user: &User) {
    println!("{}\t{}\t{}", user.id, user.name, user.email);
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(group) = args.next() else {
        print_usage();
        return Ok(());
    };
    if group != "users" {
        print_usage();
        return Ok(());
    }

    let svc = UserService::new(InMemoryUserRepo::seeded());

    match args.next().as_deref() {
        Some("list") => {
            let users = svc.list_all().map_err(|e| format!("list failed: {}", e))?;
            for user in &users {
                print_user(user);
            }
            Ok(())
        }
        Some("get") => {
            let Some(raw) = args.next() else {
                return Err("missing <id> for get".into());
            };
            let id = parse_user_id(&raw).map_err(|e| e.to_string())?;
            match svc.get(id) {
                Ok(user) => {
                    print_user(&user);
                    Ok(())
                }
                Err(e @ CoreError::NotFound(_)) => Err(e.to_string()),
                Err(e) => Err(format!("get failed: {}", e)),
            }
        }
        Some("create") => {
            let (Some(name), Some(email)) = (args.next(), args.next()) else {
                return Err("create requires <name> <email>".into());
            };
            if let Some(extra) = args.next() {
                return Err(format!("unknown argument: {}", extra));
            }
            let user = svc
                .create(NewUser::new(name, email))
                .map_err(|e| format!("create failed: {}", e))?;
            print_user(&user);
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn main() {
    if let Err(msg) = run() {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
