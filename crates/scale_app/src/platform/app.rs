use std::io::{self, Write};
use std::sync::{mpsc, Arc};

use anyhow::Context;
use chrono::Local;
use scale_core::{update, AppState, DashboardView, Msg};
use scale_engine::{Credentials, EngineHandle, EnvStorage, FileStorage, ReqwestBackend};
use scale_logging::{scale_info, scale_warn};

use super::config::ScaleConfig;
use super::effects::{EffectRunner, MsgSink};
use super::notify::TerminalNotifier;
use super::timer::PollTimer;
use super::ui;

pub fn run_app(config: ScaleConfig) -> anyhow::Result<()> {
    let backend_config = config.backend_config();
    if config.backend_url.is_none() {
        scale_warn!(
            "No backend_url configured; using development address {}",
            backend_config.base_url
        );
    }
    scale_info!(
        "Scale terminal starting backend={} poll_interval_ms={} storage_dir={:?}",
        backend_config.base_url,
        config.poll_interval_ms,
        config.storage_dir
    );

    let credentials = Credentials::new(
        Box::new(FileStorage::new(&config.storage_dir)),
        Box::new(EnvStorage::from_env()),
    );
    // Resolved once; the backend decides what a missing identifier means.
    let client_id = credentials.client_id();
    if client_id.is_none() {
        scale_warn!("No client_id in {:?}; polling without one", config.storage_dir);
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    let backend = ReqwestBackend::new(&backend_config).context("invalid backend address")?;
    let engine = EngineHandle::new(Arc::new(backend), Arc::new(MsgSink::new(msg_tx.clone())))?;
    let timer = PollTimer::start(config.poll_interval(), msg_tx.clone())
        .context("failed to start poll timer")?;
    let mut runner = EffectRunner::new(
        engine,
        credentials,
        timer,
        TerminalNotifier::new(io::stdout()),
    );
    ui::input::spawn_reader(msg_tx.clone()).context("failed to read operator input")?;

    let mut state = AppState::with_client_id(client_id).with_classifier(config.classifier());
    let _ = msg_tx.send(Msg::Started);
    drop(msg_tx);

    draw(&state.view())?;
    while let Ok(msg) = msg_rx.recv() {
        let clock_tick = matches!(msg, Msg::PollTick);
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.run(effects);

        if state.is_closed() {
            break;
        }
        if state.consume_dirty() || clock_tick {
            draw(&state.view())?;
        }
    }

    scale_info!("Scale terminal closed");
    Ok(())
}

fn draw(view: &DashboardView) -> io::Result<()> {
    let clock = Local::now()
        .format(ui::constants::CLOCK_FORMAT)
        .to_string();
    let mut out = io::stdout().lock();
    write!(out, "{}", ui::render::CLEAR_SCREEN)?;
    for line in ui::render::render(view, &clock) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
