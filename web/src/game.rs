use crate::utils::*;
use chrono::{DateTime, Utc};
use clap::Args;
use numguess_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// How many finished games the history panel lists.
const HISTORY_DISPLAY_LIMIT: usize = 5;

type WallClock = fn() -> DateTime<Utc>;

pub(crate) type Engine = game::GameEngine<game::RandomTargets, WallClock>;

fn new_engine(seed: u64, clock: WallClock) -> Engine {
    game::GameEngine::new(game::RandomTargets::new(seed), clock)
}

const fn guess_class(hint: game::GuessHint) -> &'static str {
    use game::GuessHint::*;
    match hint {
        Low => "low",
        High => "high",
        Correct => "correct",
    }
}

fn progress_style(progress: f32) -> String {
    format!("width: {}%", (progress.clamp(0.0, 1.0) * 100.0).round())
}

/// Newest first, capped for display.
fn recent_history(history: &[game::HistoryRecord]) -> impl Iterator<Item = &game::HistoryRecord> {
    history.iter().rev().take(HISTORY_DISPLAY_LIMIT)
}

fn history_result(record: &game::HistoryRecord) -> (&'static str, &'static str) {
    if record.won {
        ("won", "🎉 Won")
    } else {
        ("lost", "💀 Lost")
    }
}

fn history_details(record: &game::HistoryRecord) -> String {
    format!("Target: {} | Attempts: {}", record.target, record.attempts)
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(String),
    Submit,
    NewGame,
    EngineChanged(game::GameEvent),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: Engine,
    input: String,
}

impl GameView {
    fn submit(&mut self) {
        match self.engine.submit_guess(&self.input) {
            Ok(outcome) => {
                log::debug!("guess accepted: {:?}", outcome);
                self.input.clear();
            }
            Err(err) => log::debug!("guess rejected: {:?}", err),
        }
    }

    fn view_stats(&self) -> Html {
        let used = self.engine.attempts_used();
        let max = self.engine.max_attempts();
        let remaining = self.engine.attempts_remaining();
        let progress = progress_style(self.engine.progress());

        html! {
            <>
                <div class="game-stats">
                    <div class="stat-item">
                        <span class="stat-label">{"Attempts:"}</span>
                        <span class="stat-value">{format!("{}/{}", used, max)}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-label">{"Remaining:"}</span>
                        <span class="stat-value">{remaining.to_string()}</span>
                    </div>
                </div>
                <div class="progress-bar">
                    <div class="progress-fill" style={progress}/>
                </div>
            </>
        }
    }

    fn view_input(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            Msg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onkeypress = ctx
            .link()
            .batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Submit));
        let onclick = ctx.link().callback(|_| Msg::Submit);

        html! {
            <div class="game-input">
                <input
                    type="number"
                    class="guess-input"
                    placeholder="Enter your guess (1-100)"
                    min={game::rules::MIN_TARGET.to_string()}
                    max={game::rules::MAX_TARGET.to_string()}
                    value={self.input.clone()}
                    {oninput}
                    {onkeypress}
                />
                <button class="guess-button" {onclick}>{"Guess!"}</button>
            </div>
        }
    }

    fn view_guesses(&self) -> Html {
        let guesses = self.engine.guesses();
        if guesses.is_empty() {
            return html! {};
        }

        html! {
            <div class="guessed-numbers">
                <h3>{"Previous Guesses:"}</h3>
                <div class="guesses-list">
                    {
                        for guesses.iter().map(|guess| html! {
                            <span class={classes!("guess-tag", guess_class(guess.hint))}>
                                {guess.value.to_string()}
                            </span>
                        })
                    }
                </div>
            </div>
        }
    }

    fn view_history(&self) -> Html {
        let history = self.engine.history();
        if history.is_empty() {
            return html! {};
        }

        html! {
            <div class="game-history">
                <h3>{"Game History"}</h3>
                <div class="history-list">
                    {
                        for recent_history(history).map(|record| {
                            let (class, result) = history_result(record);
                            html! {
                                <div class={classes!("history-item", class)}>
                                    <span class="history-result">{result}</span>
                                    <span class="history-details">{history_details(record)}</span>
                                    <span class="history-time">{format_local_time(record.finished_at)}</span>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let mut engine = new_engine(seed, utc_now);

        let link = ctx.link().clone();
        engine.subscribe(move |event| link.send_message(Msg::EngineChanged(*event)));

        Self {
            engine,
            input: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Input(value) => {
                self.input = value;
                true
            }
            // re-rendering is driven by the engine events
            Submit => {
                self.submit();
                false
            }
            NewGame => {
                self.input.clear();
                self.engine.start_new_game();
                false
            }
            EngineChanged(event) => {
                log::trace!("engine event: {:?}", event);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = self.engine.status();
        let feedback = self.engine.feedback();
        let cb_new_game = ctx.link().callback(|_| Msg::NewGame);

        html! {
            <div class="game-container">
                <header class="game-header">
                    <h1>{"🎯 Number Guessing Game"}</h1>
                    <p>{"Guess the number between 1 and 100!"}</p>
                </header>
                { self.view_stats() }
                if status.is_playing() {
                    { self.view_input(ctx) }
                }
                <div class={classes!("message", feedback.kind.as_str())}>
                    {feedback.text.clone()}
                </div>
                { self.view_guesses() }
                if status.is_finished() {
                    <div class="game-over">
                        <button class="new-game-button" onclick={cb_new_game}>{"Play Again"}</button>
                    </div>
                }
                { self.view_history() }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(0).unwrap()
    }

    fn record(target: game::Value, won: bool) -> game::HistoryRecord {
        game::HistoryRecord {
            target,
            attempts: 4,
            won,
            finished_at: t0(),
        }
    }

    #[test]
    fn history_panel_lists_five_newest_first() {
        let history: Vec<_> = (1..=7).map(|target| record(target, true)).collect();

        let targets: Vec<_> = recent_history(&history).map(|r| r.target).collect();

        assert_eq!(targets, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn history_panel_shows_everything_when_short() {
        let history = vec![record(10, true), record(20, false)];

        let targets: Vec<_> = recent_history(&history).map(|r| r.target).collect();

        assert_eq!(targets, vec![20, 10]);
    }

    #[test]
    fn history_rows_describe_result_and_target() {
        assert_eq!(history_result(&record(3, true)), ("won", "🎉 Won"));
        assert_eq!(history_result(&record(3, false)), ("lost", "💀 Lost"));
        assert_eq!(history_details(&record(42, true)), "Target: 42 | Attempts: 4");
    }

    #[test]
    fn progress_style_is_a_percentage() {
        assert_eq!(progress_style(0.0), "width: 0%");
        assert_eq!(progress_style(0.3), "width: 30%");
        assert_eq!(progress_style(1.0), "width: 100%");
    }

    #[test]
    fn guess_tags_follow_recorded_hints() {
        let mut engine = new_engine(3, t0);
        for value in 1..=100u8 {
            if engine.is_finished() {
                break;
            }
            engine.submit_guess(&value.to_string()).unwrap();
        }

        let classes: Vec<_> = engine.guesses().iter().map(|g| guess_class(g.hint)).collect();
        let (last, earlier) = classes.split_last().unwrap();

        assert!(earlier.iter().all(|&class| class == "low"));
        match engine.status() {
            game::GameStatus::Won => assert_eq!(*last, "correct"),
            game::GameStatus::Lost => assert_eq!(*last, "low"),
            game::GameStatus::Playing => panic!("game should be over"),
        }
    }

    #[test]
    fn seeded_engines_pick_the_same_target() {
        let mut a = new_engine(99, t0);
        let mut b = new_engine(99, t0);

        for value in 1..=10u8 {
            let raw = value.to_string();
            assert_eq!(a.submit_guess(&raw), b.submit_guess(&raw));
        }
        assert_eq!(a.revealed_target(), b.revealed_target());
    }
}
