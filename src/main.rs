use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use log::info;

use maze_walker::build_maze;
use maze_walker::config::Args;
use maze_walker::game::{Outcome, Session, PROMPT, WELCOME};
use maze_walker::render::{render_to_string, restore_terminal, Renderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating {}x{} maze with seed {seed}", args.width, args.height);

    let maze = build_maze(&args.maze_config(seed))?;

    if args.print {
        print!("{}", render_to_string(&maze, None));
        return Ok(());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("enabling raw mode")?;

    let mut session = Session::new(maze);
    let result = enter_screen(&mut stdout).and_then(|()| run(&mut stdout, &mut session));

    restore_terminal(&mut stdout, terminal::disable_raw_mode).context("restoring terminal")?;

    let outcome = result.context("terminal session failed")?;
    println!("{}", outcome.message());
    info!("finished after {} moves", session.moves());
    Ok(())
}

fn enter_screen(stdout: &mut Stdout) -> io::Result<()> {
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Ok(())
}

enum Input {
    Key(char),
    Escape,
    Redraw,
}

fn run(stdout: &mut Stdout, session: &mut Session) -> io::Result<Outcome> {
    show_welcome(stdout)?;
    loop {
        match read_input()? {
            Input::Key(_) => break,
            Input::Escape => return Ok(Outcome::Quit),
            Input::Redraw => show_welcome(stdout)?,
        }
    }

    let (width, height) = (session.maze().width(), session.maze().height());
    let mut renderer = Renderer::new(width, height);
    let mut status = PROMPT;

    loop {
        renderer.render(stdout, session.maze(), session.player(), status)?;
        let key = match read_input()? {
            Input::Key(key) => key,
            Input::Escape => return Ok(Outcome::Quit),
            Input::Redraw => {
                renderer.invalidate();
                continue;
            }
        };
        let outcome = session.handle_key(key);
        status = outcome.message();
        if outcome == Outcome::Won {
            renderer.render(stdout, session.maze(), session.player(), status)?;
            let _ = read_input()?;
        }
        if outcome.is_final() {
            return Ok(outcome);
        }
    }
}

fn show_welcome(stdout: &mut Stdout) -> io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(MoveTo(0, 0))?;
    stdout.queue(Print(WELCOME))?;
    stdout.queue(MoveTo(0, 1))?;
    stdout.queue(Print("Press any key to start..."))?;
    stdout.flush()
}

/// Blocks until a character key, Esc or a resize arrives.
fn read_input() -> io::Result<Input> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => return Ok(Input::Escape),
                KeyCode::Char(c) => return Ok(Input::Key(c)),
                _ => {}
            },
            Event::Resize(_, _) => return Ok(Input::Redraw),
            _ => {}
        }
    }
}
