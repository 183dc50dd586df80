use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::{
    app::{
        plot::{PlotData, PlotRenderer},
        ui,
    },
    models::View,
};

/// Full-screen chart in the terminal. `render` returns once the user closes it.
#[derive(Debug, Default)]
pub struct TerminalViewer;

impl PlotRenderer for TerminalViewer {
    fn render(&mut self, plot: &PlotData) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = show(&mut terminal, plot);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

fn show<B: Backend>(terminal: &mut Terminal<B>, plot: &PlotData) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, plot))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Ok(()),
                _ => {}
            }
        }
    }
}

/// Writes the plot as plain text, one point per line.
pub struct PlainViewer<W: Write> {
    out: W,
}

impl<W: Write> PlainViewer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlotRenderer for PlainViewer<W> {
    fn render(&mut self, plot: &PlotData) -> Result<()> {
        writeln!(self.out, "{}", plot.title())?;

        match plot.view() {
            View::Hist => {
                let histogram = plot.histogram()?;
                writeln!(self.out, "{}\t{}", plot.x_label(), plot.y_label())?;
                for (edge, count) in histogram.edges().iter().zip(histogram.counts()) {
                    writeln!(
                        self.out,
                        "{:.4}..{:.4}\t{}",
                        edge,
                        edge + histogram.width(),
                        count
                    )?;
                }
            }
            View::Timeline => {
                writeln!(self.out, "{}\t{}", plot.x_label(), plot.y_label())?;
                for (label, value) in plot.points() {
                    writeln!(self.out, "{}\t{:.4}", label, value)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
