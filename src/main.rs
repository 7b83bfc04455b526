//! Cobweb - terminal graphical analysis of one-dimensional maps.

use anyhow::{Context, Result};
use clap::Parser;
use cobweb::app::App;
use cobweb::config::Config;
use cobweb::domain::Domain;
use cobweb::interaction::{PlotKey, PointerButton};
use cobweb::map::MapKind;
use cobweb::orbit::compute_orbit;
use cobweb::ui;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "cobweb")]
#[command(about = "Cobweb diagrams for one-dimensional maps in the terminal", long_about = None)]
struct Args {
    /// Map to iterate
    #[arg(short, long, value_enum, default_value_t = MapKind::Logistic)]
    map: MapKind,

    /// Initial parameter for map families
    #[arg(short, long, allow_negative_numbers = true)]
    param: Option<f64>,

    /// Lower horizontal bound
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x_min: f64,

    /// Upper horizontal bound
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    x_max: f64,

    /// Lower vertical bound
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y_min: f64,

    /// Upper vertical bound
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    y_max: f64,

    /// Number of samples used to draw the curve
    #[arg(long)]
    samples: Option<usize>,

    /// Convergence tolerance between consecutive iterates
    #[arg(long)]
    tolerance: Option<f64>,

    /// Maximum number of iterations per orbit
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Parameter change per Up/Down key press
    #[arg(long)]
    step: Option<f64>,

    /// Trace an orbit from this starting value on startup
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,

    /// Print the orbit from --x0 and exit without opening the viewer
    #[arg(long, requires = "x0")]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = Config::default();
        if let Some(samples) = self.samples {
            config.plot.samples = samples;
        }
        if let Some(tolerance) = self.tolerance {
            config.orbit.tolerance = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.orbit.max_iterations = max_iterations;
        }
        if let Some(step) = self.step {
            config.plot.parameter_step = step;
        }
        config.validate()?;
        Ok(config)
    }

    fn domain(&self) -> Result<Domain> {
        Ok(Domain::new(self.x_min, self.x_max, self.y_min, self.y_max)?)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Cobweb");
    }

    let config = match args.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    };
    let domain = match args.domain() {
        Ok(domain) => domain,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    };
    if args.param.is_some() && args.map.default_parameter().is_none() {
        eprintln!(
            "Warning: {} has no parameter, ignoring --param",
            args.map.name()
        );
    }
    let function = args.map.build(args.param);

    if args.print {
        let x0 = args.x0.context("--print requires --x0")?;
        match compute_orbit(&function, x0, &domain, &config.orbit) {
            Ok(orbit) => {
                print!("{}", orbit.to_text());
                tracing::info!("Printed {} iterates", orbit.len());
                return Ok(());
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
    }

    let mut app = App::new(function, domain, config).with_formula(args.map.formula());
    if let Some(x0) = args.x0 {
        app.run(x0);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Cobweb exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('q'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                            app.key(PlotKey::Escape);
                        }

                        // Parameter
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.key(PlotKey::Up);
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.key(PlotKey::Down);
                        }

                        // Keyboard cursor
                        (KeyModifiers::NONE, KeyCode::Left)
                        | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                            app.move_cursor(-1);
                        }
                        (KeyModifiers::NONE, KeyCode::Right)
                        | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                            app.move_cursor(1);
                        }
                        (KeyModifiers::SHIFT, KeyCode::Left)
                        | (KeyModifiers::SHIFT, KeyCode::Char('H')) => {
                            app.move_cursor(-10);
                        }
                        (KeyModifiers::SHIFT, KeyCode::Right)
                        | (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
                            app.move_cursor(10);
                        }
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                            app.select_at_cursor();
                        }

                        // Features
                        (KeyModifiers::NONE, KeyCode::Char('c')) => app.clear_orbit(),
                        (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_orbit(),
                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                        (KeyModifiers::SHIFT, KeyCode::Char('?'))
                        | (KeyModifiers::NONE, KeyCode::Char('?')) => app.show_help(),

                        _ => {}
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        app.mouse_moved(mouse.column, mouse.row);
                    }
                    MouseEventKind::Down(button) => {
                        let button = match button {
                            MouseButton::Left => PointerButton::Left,
                            MouseButton::Middle => PointerButton::Middle,
                            MouseButton::Right => PointerButton::Right,
                        };
                        app.mouse_down(mouse.column, mouse.row, button);
                    }
                    _ => {}
                },
                _ => {}
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
