use clap::{ArgEnum, Parser, Subcommand};
use dyn_clone::DynClone;
use log::{error, info};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::time::Instant;
use wordle_autoplay::selectors::*;
use wordle_autoplay::*;

/// Plays Wordle-style puzzles automatically, printing each guess and the feedback it received.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// How to choose each guess from the remaining candidates.
    #[clap(short, long, arg_enum, default_value = "frequency")]
    strategy: Strategy,

    /// Seed for the random strategy. Without it, guesses differ on every run.
    #[clap(long)]
    seed: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Guess the candidate whose letters appear in the most other candidates.
    Frequency,
    /// Guess a random candidate.
    Random,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game made of the given objective words, in order.
    Play {
        #[clap(required = true)]
        objectives: Vec<String>,
    },
    /// Play against a word that you choose, entering the feedback for each guess.
    Interactive {
        /// Number of letters in your word.
        #[clap(short, long, default_value_t = 5)]
        length: usize,
    },
    /// Solve every word of the given length in the words file, and report how many guesses were
    /// needed.
    Benchmark {
        #[clap(short, long, default_value_t = 5)]
        length: usize,
    },
}

/// A selector that can be copied for each puzzle and sent to other threads.
trait PuzzleSelector: GuessSelector + DynClone + Send + Sync {}

impl<S: GuessSelector + DynClone + Send + Sync> PuzzleSelector for S {}

dyn_clone::clone_trait_object!(PuzzleSelector);

fn main() -> Result<(), WordleError> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    println!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!("There are {} possible words.", word_bank.len());

    let selector = create_selector(args.strategy, args.seed);
    let result = match args.command {
        Command::Play { objectives } => {
            play_session(LocalOracle::new(objectives), &word_bank, selector)
        }
        Command::Interactive { length } => {
            play_session(InteractiveOracle::new(length), &word_bank, selector)
        }
        Command::Benchmark { length } => {
            run_benchmark(&word_bank, length, selector);
            Ok(())
        }
    };
    if let Err(e) = &result {
        error!("Session stopped: {}", e);
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    result
}

fn create_selector(strategy: Strategy, seed: Option<u64>) -> Box<dyn PuzzleSelector> {
    match (strategy, seed) {
        (Strategy::Frequency, _) => Box::new(MaxUniqueLetterFrequencySelector::new()),
        (Strategy::Random, Some(seed)) => Box::new(RandomSelector::seeded(seed)),
        (Strategy::Random, None) => Box::new(RandomSelector::new()),
    }
}

fn play_session<O: Oracle>(
    oracle: O,
    word_bank: &WordBank,
    selector: Box<dyn PuzzleSelector>,
) -> Result<(), WordleError> {
    let mut session = Session::start(oracle, word_bank, selector)?;
    let print_round = |round: &Round| {
        println!("{} -> {}", round.guess, format_results(&round.results));
    };
    while let Some(outcome) = session.solve_next_with(print_round)? {
        if let Some(solution) = outcome.solution() {
            println!(
                "SOLVED! Target word = {} ({} guesses)",
                solution,
                outcome.rounds.len()
            );
        }
    }
    info!("Game status: {}", session.status()?);
    Ok(())
}

fn run_benchmark(word_bank: &WordBank, length: usize, selector: Box<dyn PuzzleSelector>) {
    let objectives = word_bank.words_with_length(length);
    // Every guess removes at least one candidate, so this many guesses always suffices.
    let max_num_guesses = objectives.len() as u32;
    let num_guesses_per_game: Vec<u32> = objectives
        .par_iter()
        .filter_map(|objective| {
            let selector = dyn_clone::clone_box(&*selector);
            match play_game_with_selector(objective, max_num_guesses, word_bank, selector) {
                GameResult::Success(guesses) => Some(guesses.len() as u32),
                other => {
                    error!("Failed to solve {}: {:?}", objective, other);
                    None
                }
            }
        })
        .collect();
    println!(
        "Solved {} of {} words. Results:",
        num_guesses_per_game.len(),
        objectives.len()
    );
    if num_guesses_per_game.is_empty() {
        return;
    }

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
}

/// An oracle backed by the person at the terminal, who has chosen a word and types the feedback
/// for each guess.
struct InteractiveOracle {
    word_length: usize,
    num_guesses: usize,
}

impl InteractiveOracle {
    fn new(word_length: usize) -> InteractiveOracle {
        InteractiveOracle {
            word_length,
            num_guesses: 0,
        }
    }
}

impl Oracle for InteractiveOracle {
    fn start_game(&mut self) -> Result<NewGame, WordleError> {
        println!(
            "Choose a {}-letter word from the word-list. Press enter once you've chosen.",
            self.word_length
        );
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;

        println!(
            "I will now try to guess your word.\n\n\
             For each guess, enter the correctness of each letter as:\n\n\
               * '.' = this letter is not in the word\n\
               * 'y' = this letter is in the word, but not in this location\n\
               * 'g' = this letter is in the word and in the right location.\n\n\
             For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"");
        Ok(NewGame {
            game_id: String::from("interactive"),
            hint: Hint::new("_".repeat(self.word_length)),
        })
    }

    fn make_guess(&mut self, _game_id: &str, guess: &str) -> Result<GuessResponse, WordleError> {
        self.num_guesses += 1;
        println!("I'm guessing: {}. How did I do?", guess);
        loop {
            match read_results_for_guess(guess) {
                Ok(results) => {
                    let solved = results.iter().all(|result| *result == LetterResult::Exact);
                    return Ok(GuessResponse {
                        results,
                        solved,
                        next_hint: None,
                    });
                }
                Err(WordleError::Io(e)) => return Err(WordleError::Io(e)),
                Err(e) => println!("{}. Try again.", e),
            }
        }
    }

    fn get_status(&mut self, _game_id: &str) -> Result<String, WordleError> {
        Ok(format!("{} guesses made", self.num_guesses))
    }
}

fn read_results_for_guess(guess: &str) -> Result<Vec<LetterResult>, WordleError> {
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Err(WordleError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no more input",
        )));
    }
    let results = parse_results(buffer.trim())?;
    GuessResult::new(guess, results).map(|result| result.results)
}
