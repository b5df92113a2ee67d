use anyhow::Result;
use scorecast_client::PredictionApi;
use scorecast_services::{FormError, MatchForm, PredictorController};
use scorecast_store::HistoryStore;
use scorecast_ui::ResultView;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Line-oriented form session. Commands run strictly one at a time; `submit`
/// holds the loop until its one network call resolves, so a second submit
/// cannot start while one is in flight.
pub async fn run<A, S, V>(controller: &mut PredictorController<A, S, V>) -> Result<()>
where
    A: PredictionApi,
    S: HistoryStore,
    V: ResultView,
{
    println!();
    println!("⚽ Scorecast");
    println!("Type 'help' to list commands.");
    println!();
    print_form(controller.form());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("scorecast> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "help" => print_help(),
            "form" => print_form(controller.form()),
            "teams" => print_teams(controller.form()),
            "leagues" => print_leagues(controller.form()),
            "home" => match parse_choice(rest) {
                Ok(choice) => report(controller.form_mut().select_home(choice)),
                Err(message) => println!("{}", message),
            },
            "away" => match parse_choice(rest) {
                Ok(choice) => report(controller.form_mut().select_away(choice)),
                Err(message) => println!("{}", message),
            },
            "league" => match parse_choice(rest) {
                Ok(choice) => report(controller.form_mut().select_league(choice)),
                Err(message) => println!("{}", message),
            },
            "date" => report(controller.form_mut().set_date(rest)),
            "submit" => controller.submit().await,
            "recent" => controller.show_recent(),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{}'. Type 'help' for the list.", command),
        }
    }

    Ok(())
}

/// Maps a 1-based option number to a catalog index; `0` clears the field.
fn parse_choice(rest: &str) -> Result<Option<usize>, String> {
    match rest.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(number) => Ok(Some(number - 1)),
        Err(_) => Err("Expected an option number; 'teams' and 'leagues' list them.".to_string()),
    }
}

fn report(outcome: Result<(), FormError>) {
    if let Err(e) = outcome {
        println!("{}", e);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  home N      pick the home team by number (0 clears)");
    println!("  away N      pick the away team by number (0 clears)");
    println!("  league N    pick the league by number (0 clears)");
    println!("  date VALUE  set the match date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)");
    println!("  teams       list team options");
    println!("  leagues     list league options");
    println!("  form        show the current form");
    println!("  submit      request a prediction");
    println!("  recent      show the recent predictions table");
    println!("  quit        exit");
}

fn print_form(form: &MatchForm) {
    println!("Home team : {}", form.home().unwrap_or("-"));
    println!("Away team : {}", form.away().unwrap_or("-"));
    println!("Date      : {}", form.match_date());
    println!("League    : {}", form.league().unwrap_or("-"));
}

fn print_teams(form: &MatchForm) {
    println!("Teams ('home N' / 'away N'; 0 clears):");
    println!("  0) none");
    for (index, (team, _)) in form.home_options().enumerate() {
        let marker = if form.home() == Some(team) {
            "  [home]"
        } else if form.away() == Some(team) {
            "  [away]"
        } else {
            ""
        };
        println!("  {}) {}{}", index + 1, team, marker);
    }
    println!("A team picked on one side is unavailable on the other.");
}

fn print_leagues(form: &MatchForm) {
    println!("Leagues ('league N'; 0 clears):");
    println!("  0) none");
    for (index, league) in form.leagues().iter().enumerate() {
        let marker = if form.league() == Some(league.as_str()) {
            "  [selected]"
        } else {
            ""
        };
        println!("  {}) {}{}", index + 1, league, marker);
    }
}
