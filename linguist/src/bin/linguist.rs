use clap::{Arg, ArgAction, Command};
use linguist::{
    GeminiProvider, LANGUAGES, MockMode, MockModel, Session, SessionState, TranslationClient,
    TranslationMode, TranslationResult, translate_with,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("linguist")
        .version("0.1.0")
        .about("Translate text with tone control and web-search grounding")
        .arg(
            Arg::new("text")
                .help("Text to translate (omit for interactive mode)")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target language, as listed by --list-languages")
                .default_value(linguist::DEFAULT_TARGET_LANGUAGE),
        )
        .arg(
            Arg::new("informal")
                .long("informal")
                .short('i')
                .help("Translate into the informal (colloquial) register")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .short('d')
                .help("Regional dialect of the target language, e.g. Egyptian"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock model instead of Gemini (echoes the prompt)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .short('l')
                .help("Print the supported target languages and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show debug logs")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if matches.get_flag("list-languages") {
        for language in LANGUAGES {
            println!("{}", language);
        }
        return Ok(());
    }

    let client = if matches.get_flag("mock") {
        TranslationClient::new(Arc::new(MockModel::new(MockMode::Echo)))
    } else {
        TranslationClient::new(Arc::new(GeminiProvider::from_env()?))
    };

    let mut session = Session::new();
    if let Some(language) = matches.get_one::<String>("to") {
        session.set_target_language(language)?;
    }
    if matches.get_flag("informal") {
        session.set_mode(TranslationMode::Informal);
    }
    session.set_dialect(matches.get_one::<String>("dialect").map(String::as_str));

    match matches.get_one::<String>("text") {
        Some(text) => {
            session.set_text(text.as_str());
            translate_with(&mut session, &client).await;
            print_state(&session);
            if matches!(session.state(), SessionState::Failed(_)) {
                std::process::exit(1);
            }
        }
        None => interactive(&mut session, &client).await?,
    }

    Ok(())
}

const INTERACTIVE_HELP: &str = "\
Type text and press Enter to translate it. Commands:
  :lang <name>        change the target language
  :mode formal|informal
  :dialect [name]     set or unset the dialect
  :clear              clear input and result
  :state              show the current settings
  :quit               exit";

async fn interactive(
    session: &mut Session,
    client: &TranslationClient,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", INTERACTIVE_HELP);
    print_settings(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            ":quit" | ":q" => break,
            ":help" => println!("{}", INTERACTIVE_HELP),
            ":state" => print_settings(session),
            ":clear" => {
                session.clear();
                println!("Cleared.");
            }
            ":lang" => match session.set_target_language(argument) {
                Ok(()) => print_settings(session),
                Err(e) => eprintln!("{} (see --list-languages)", e),
            },
            ":mode" => match argument.parse::<TranslationMode>() {
                Ok(mode) => {
                    session.set_mode(mode);
                    print_settings(session);
                }
                Err(e) => eprintln!("{}", e),
            },
            ":dialect" => {
                session.set_dialect(Some(argument));
                print_settings(session);
            }
            _ => {
                session.set_text(line);
                if translate_with(session, client).await {
                    print_state(session);
                }
            }
        }
    }

    Ok(())
}

fn print_settings(session: &Session) {
    match session.dialect() {
        Some(dialect) => println!(
            "→ {} ({}), {}",
            session.target_language(),
            dialect,
            session.mode().name()
        ),
        None => println!(
            "→ {}, {}",
            session.target_language(),
            session.mode().name()
        ),
    }
}

fn print_state(session: &Session) {
    match session.state() {
        SessionState::Success(result) => print_result(result),
        SessionState::Failed(message) => eprintln!("Translation Failed: {}", message),
        SessionState::Idle | SessionState::Loading { .. } => {}
    }
}

fn print_result(result: &TranslationResult) {
    println!("{}", result.translated_text);

    if let Some(notes) = &result.notes {
        println!();
        println!("Cultural Notes:");
        println!("  {}", notes);
    }

    if let Some(links) = &result.grounding_links {
        println!();
        println!("Search Grounding References:");
        for link in links {
            println!("  - {} <{}>", link.title, link.uri);
        }
    }
}
