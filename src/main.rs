use anyhow::{Context, Result};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use studyplan::core::config::Config;
use studyplan::core::error::{AccountError, ReportError, WizardError};
use studyplan::core::state::AppState;
use studyplan::core::startup::build_state;
use studyplan::core::tracing_init::init_tracing;
use studyplan::locale::strings::Strings;
use studyplan::models::personality::ALL_PERSONALITY_TYPES;
use studyplan::report::render::{ReportRenderer, TextReportRenderer};
use studyplan::utils::links::{open_personality_test, SystemBrowser, PERSONALITY_TEST_URL};
use studyplan::wizard::flow::Step;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        Some(PathBuf::from(&args[1]))
    } else {
        let default = PathBuf::from("config.toml");
        default.exists().then_some(default)
    };

    // Load and validate configuration
    let config = match &config_path {
        Some(path) => Config::from_file(path).context(format!(
            "Failed to load configuration from '{}'. \
            Copy config.example.toml to config.toml and adjust the values.",
            path.display()
        ))?,
        None => Config::default(),
    };

    init_tracing(&config.logging);

    info!(
        config_path = ?config_path,
        data_dir = %config.storage.data_dir.display(),
        locale = %config.program.locale,
        "studyplan starting"
    );

    let mut state = build_state(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", state.strings().brand);
    print_help(state.strings());

    loop {
        print!("{}> ", prompt(&state));
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        if matches!(command, "quit" | "exit") {
            break;
        }

        handle_command(&mut state, command, rest.trim());
    }

    info!("Shutting down");
    Ok(())
}

fn prompt(state: &AppState) -> String {
    match state.store.session() {
        Some(session) => format!("{} [{}]", session.username(), state.wizard.step()),
        None => String::new(),
    }
}

fn print_help(s: &Strings) {
    println!("Commands:");
    println!("  register <username> <password> <year 1-4> <full name>   {}", s.register);
    println!("           {}", s.password_hint);
    println!("  login <username> <password>   {}", s.login);
    println!("  logout   {}", s.logout);
    println!("  show | next | back | results");
    println!("  test                     open the personality test");
    println!("  types                    list personality types");
    println!("  personality <code>       enter your 4-letter type");
    println!("  courses | toggle <n>     list / toggle electives");
    println!("  save | export | help | quit");
}

fn handle_command(state: &mut AppState, command: &str, rest: &str) {
    let s = state.strings();

    match command {
        "help" => print_help(s),
        "register" => {
            let args = match parse_register_args(rest) {
                Ok(args) => args,
                Err(e) => {
                    println!("{}", s.account_error(&e));
                    return;
                }
            };

            let department = state.catalog.department().to_string();
            match state.wizard.register(
                &mut state.store,
                args.username,
                args.password,
                args.fullname,
                args.year,
                &department,
            ) {
                Ok(_) => {
                    println!("{}", s.register_success);
                    show_step(state);
                }
                Err(WizardError::Account(e @ AccountError::InvalidPassword(_))) => {
                    println!("{}", s.account_error(&e));
                    println!("{}", s.password_hint);
                }
                Err(e) => println!("{}", s.wizard_error(&e)),
            }
        }
        "login" => {
            let (username, password) = rest.split_once(' ').unwrap_or((rest, ""));
            match state.wizard.login(&mut state.store, username, password) {
                Ok(outcome) => {
                    if outcome.promoted {
                        println!(
                            "{} {}, {}",
                            s.promoted,
                            s.year(outcome.user.year.get()),
                            s.promoted_retake
                        );
                    }
                    show_step(state);
                }
                Err(WizardError::Account(AccountError::MissingField)) => {
                    println!("{}", s.missing_login_fields)
                }
                Err(e) => println!("{}", s.wizard_error(&e)),
            }
        }
        "logout" => state.wizard.logout(&mut state.store),
        "show" => show_step(state),
        "next" => match state.wizard.next(&mut state.store) {
            Ok(_) => show_step(state),
            Err(e) => println!("{}", s.wizard_error(&e)),
        },
        "results" => match state.wizard.show_results(&mut state.store) {
            Ok(_) => show_step(state),
            Err(e) => println!("{}", s.wizard_error(&e)),
        },
        "back" => match state.wizard.back() {
            Ok(_) => show_step(state),
            Err(e) => println!("{}", s.wizard_error(&e)),
        },
        "test" => {
            if open_personality_test(&SystemBrowser) {
                println!("{}", s.personality_test_instructions);
            } else {
                println!("{} ({})", s.cannot_open_link, PERSONALITY_TEST_URL);
            }
        }
        "types" => {
            println!("{}:", s.quick_select);
            for row in ALL_PERSONALITY_TYPES.chunks(4) {
                println!("  {}", row.join("  "));
            }
        }
        "personality" => match state.store.session_mut() {
            Some(session) => {
                session.set_personality_input(rest);
                println!("{}: {}", s.label_personality, rest.to_uppercase());
            }
            None => println!("{}", s.no_session),
        },
        "courses" => print_courses(state),
        "toggle" => {
            let department = match state.store.current_user() {
                Some(user) => user.department.clone(),
                None => {
                    println!("{}", s.no_session);
                    return;
                }
            };
            let courses = state.catalog.courses_for(&department);
            let Some(course) = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| courses.get(i))
                .cloned()
            else {
                println!("toggle <1-{}>", courses.len());
                return;
            };

            if let Some(session) = state.store.session_mut() {
                session.toggle_course(&course);
            }
            print_courses(state);
        }
        "save" => match state.store.save_progress() {
            Ok(_) => println!("{}", s.progress_saved),
            Err(e) => println!("{}", s.account_error(&e)),
        },
        "export" => match state.export_report() {
            Ok(path) => println!("{}: {}", s.report_exported, path.display()),
            Err(ReportError::NoActiveSession) => println!("{}", s.no_session),
            Err(e) => println!("{}", e),
        },
        other => println!("Unknown command '{}'. Type 'help'.", other),
    }
}

#[derive(Debug, PartialEq, Eq)]
struct RegisterArgs<'a> {
    username: &'a str,
    password: &'a str,
    year: u8,
    fullname: &'a str,
}

/// Split `<username> <password> <year> <full name>`.
///
/// Any missing part is `MissingField`; a year that is not a number is
/// `InvalidYear(0)`. Range checks are left to the store.
fn parse_register_args(rest: &str) -> Result<RegisterArgs<'_>, AccountError> {
    let mut parts = rest.trim().splitn(4, ' ');
    let mut next = || parts.next().map(str::trim).filter(|p| !p.is_empty());

    let (Some(username), Some(password), Some(year), Some(fullname)) =
        (next(), next(), next(), next())
    else {
        return Err(AccountError::MissingField);
    };

    let year = year.parse::<u8>().map_err(|_| AccountError::InvalidYear(0))?;

    Ok(RegisterArgs {
        username,
        password,
        year,
        fullname,
    })
}

fn print_courses(state: &AppState) {
    let (Some(user), Some(session)) = (state.store.current_user(), state.store.session()) else {
        println!("{}", state.strings().no_session);
        return;
    };

    println!("{}:", state.strings().step_courses);
    for (i, course) in state.catalog.courses_for(&user.department).iter().enumerate() {
        let mark = if session.is_selected(course) { "x" } else { " " };
        println!("  {}. [{}] {}", i + 1, mark, course);
    }
}

fn show_step(state: &AppState) {
    let s = state.strings();
    let Some(user) = state.store.current_user() else {
        println!("{}", s.no_session);
        return;
    };

    println!("{} {}", s.welcome, user.fullname);

    match state.wizard.step() {
        Step::BasicInfo => {
            println!("== {} ==", s.step_basic_info);
            println!("{}: {}", s.label_fullname, user.fullname);
            println!("{}: {}", s.label_department, user.department);
            println!("{}: {}", s.label_year, s.year(user.year.get()));
        }
        Step::Personality => {
            println!("== {} ==", s.step_personality);
            let current = state
                .store
                .session()
                .map(|session| session.personality_input().to_uppercase())
                .unwrap_or_default();
            if !current.is_empty() {
                println!("{}: {}", s.label_personality, current);
            }
            println!("test | types | personality <code> | next | results");
        }
        Step::Courses => print_courses(state),
        Step::Summary => {
            println!("== {} ==", s.step_summary);
            if let Some(report) = state.report() {
                print!("{}", TextReportRenderer.render(&report, s, chrono::Local::now()));
            }
        }
    }
}
