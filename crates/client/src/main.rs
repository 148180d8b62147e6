use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kansai_client::api::{HttpApi, WordInput};
use kansai_client::controller::{Notifier, UiController};
use kansai_client::render;
use kansai_client::state::{Auth, Display, Tab};

const HELP: &str = "\
commands:
  search <word>          look up a word
  tab <search|register|admin>
  login <username>       prompts for the password
  logout
  register               prompts for the four fields
  edit <word>            prompts for the new fields
  delete <word>
  list                   cached words
  refresh                re-fetch words and auth status
  html                   toggle HTML output
  quit";

/// Alerts go to stderr so they stand out from results.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("[!] {message}");
    }
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kansai_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = HttpApi::from_env().expect("Failed to build HTTP client");
    tracing::info!(url = %api.base_url(), "Using dictionary server");

    let mut ui = UiController::new(api, TerminalNotifier);
    ui.load().await;
    print_status(&ui);
    println!("{HELP}");

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut html = false;

    loop {
        let Some(line) = prompt(&mut input, "> ").await else {
            break;
        };
        let (command, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((command, arg)) => (command.to_string(), arg.trim().to_string()),
            None => (line.trim().to_string(), String::new()),
        };

        match command.as_str() {
            "" => ui.input_changed(""),
            "search" | "s" if arg.is_empty() => {
                ui.search(&arg);
            }
            "search" | "s" => match ui.search(&arg) {
                Display::Found(record) if html => println!("{}", render::result_html(record)),
                Display::Found(record) => println!("{}", render::result_text(record, true)),
                Display::NotFound => println!("該当する単語が見つかりませんでした。"),
                Display::Idle => {}
            },
            "tab" => {
                let Some(tab) = parse_tab(&arg) else {
                    println!("tab must be one of: search, register, admin");
                    continue;
                };
                let shown = ui.switch_tab(tab);
                if shown != tab {
                    println!("ログインが必要です。管理者タブを表示します。");
                }
                println!("tab: {}", tab_name(shown));
            }
            "login" => {
                let Some(password) = prompt(&mut input, "password: ").await else {
                    break;
                };
                if ui.login(&arg, &password).await {
                    print_status(&ui);
                }
            }
            "logout" => {
                ui.logout().await;
                print_status(&ui);
            }
            "register" => {
                let Some(fields) = read_fields(&mut input, None).await else {
                    break;
                };
                if ui.register(fields).await {
                    println!("登録しました。");
                }
            }
            "edit" => {
                let Some(fields) = read_fields(&mut input, Some(&arg)).await else {
                    break;
                };
                if ui.edit(&arg, fields).await {
                    println!("更新しました。");
                }
            }
            "delete" => {
                if ui.delete(&arg).await {
                    println!("削除しました。");
                }
            }
            "list" => {
                for record in ui.state().words() {
                    println!("{}", render::list_line(record));
                }
            }
            "refresh" => {
                ui.refresh().await;
                print_status(&ui);
            }
            "html" => {
                html = !html;
                println!("html output: {html}");
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', try 'help'"),
        }
    }
}

async fn prompt(input: &mut Input, label: &str) -> Option<String> {
    use std::io::Write;

    print!("{label}");
    std::io::stdout().flush().ok();
    match input.next_line().await {
        Ok(line) => line,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read stdin");
            None
        }
    }
}

/// Prompt for the four word fields. When editing, the headword defaults to
/// the word being edited.
async fn read_fields(input: &mut Input, editing: Option<&str>) -> Option<WordInput> {
    let word = match editing {
        Some(current) => {
            let word = prompt(input, &format!("word [{current}]: ")).await?;
            if word.trim().is_empty() {
                current.to_string()
            } else {
                word
            }
        }
        None => prompt(input, "word: ").await?,
    };

    Some(WordInput {
        word,
        accent: prompt(input, "accent: ").await?,
        pronunciation: prompt(input, "pronunciation: ").await?,
        example: prompt(input, "example: ").await?,
    })
}

fn print_status<A, N>(ui: &UiController<A, N>)
where
    A: kansai_client::api::DictionaryApi,
    N: Notifier,
{
    let state = ui.state();
    let auth = match &state.auth {
        Auth::Authenticated(username) => format!("logged in as {username}"),
        Auth::Anonymous => "not logged in".to_string(),
    };
    let mode = if state.degraded { ", offline (read-only)" } else { "" };
    println!("{} words, {auth}{mode}", state.word_count());
}

fn parse_tab(name: &str) -> Option<Tab> {
    match name {
        "search" => Some(Tab::Search),
        "register" => Some(Tab::Register),
        "admin" => Some(Tab::Admin),
        _ => None,
    }
}

fn tab_name(tab: Tab) -> &'static str {
    match tab {
        Tab::Search => "search",
        Tab::Register => "register",
        Tab::Admin => "admin",
    }
}
