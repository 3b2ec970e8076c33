use std::io::{self, BufRead, Write};

use anyhow::Context;
use ron::ser::PrettyConfig;
use tracing::debug;

use crate::{
    board::{Player, TileId},
    command::{Command, CommandError, HELP},
    config::Config,
    game::{Game, MoveEntry, Status},
};

/// Runs the game loop until `quit` or end of input, reading one command per line from `input`.
pub fn run<R, W>(game: &mut Game, config: &Config, mut input: R, mut out: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        render(game, config, &mut out)?;
        write!(out, "{}", prompt(game.status()))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(out, "Invalid input! {e}")?;
                continue;
            }
        };
        debug!(?command, "got command");

        match command {
            Command::Play(index) => {
                if let Err(e) = game.play(index) {
                    writeln!(out, "Invalid move! {e}. Try again.")?;
                }
            }
            Command::Jump(move_index) => {
                if let Err(e) = game.jump_to(move_index) {
                    writeln!(out, "Invalid jump! {e}.")?;
                }
            }
            Command::Sort => game.toggle_move_order(),
            Command::Dump => {
                let dump = ron::ser::to_string_pretty(game, PrettyConfig::default())
                    .context("failed to serialize game")?;
                writeln!(out, "{dump}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    Ok(())
}

fn prompt(status: Status) -> String {
    match status {
        Status::InProgress(player) => format!("{player}'s turn: "),
        Status::Winner(_) | Status::Draw => "> ".to_string(),
    }
}

pub fn status_line(status: Status) -> String {
    match status {
        Status::Winner(player) => format!("Winner: {player}"),
        Status::InProgress(player) => format!("Next player: {player}"),
        Status::Draw => "It's a DRAW!".to_string(),
    }
}

pub fn render(game: &Game, config: &Config, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", status_line(game.status()))?;
    render_board(game, config, out)?;
    writeln!(out)?;
    render_moves(game, out)?;
    writeln!(out)
}

fn render_board(game: &Game, config: &Config, out: &mut impl Write) -> io::Result<()> {
    let board = game.current_board();
    let line = game.winning_line().filter(|_| config.highlight_winner);

    if config.show_coordinates {
        writeln!(out, "   a  b  c")?;
    }
    for tile in TileId::all() {
        if config.show_coordinates && tile.column() == 0 {
            write!(out, "{} ", tile.row() + 1)?;
        }

        let mark = match board[tile] {
            Some(Player::X) => 'X',
            Some(Player::O) => 'O',
            None => '-',
        };
        if line.is_some_and(|line| line.contains(&tile)) {
            write!(out, "[{mark}]")?;
        } else {
            write!(out, " {mark} ")?;
        }

        if tile.column() == 2 {
            writeln!(out)?;
        }
    }
    Ok(())
}

fn render_moves(game: &Game, out: &mut impl Write) -> io::Result<()> {
    let moves: Vec<MoveEntry> = if game.moves_descending() {
        game.moves().rev().collect()
    } else {
        game.moves().collect()
    };

    for entry in moves {
        let marker = if entry.number == game.current_move() {
            '>'
        } else {
            ' '
        };
        writeln!(out, "{marker} {:>2}. {entry}", entry.number)?;
    }
    Ok(())
}
