use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::adapter::console::dashboard::Dashboard;
use crate::application::interactors::chat::ChatInteractor;
use crate::application::interactors::recommendations::GetRecommendationsInteractor;
use crate::application::interactors::session::SessionManager;
use crate::application::interactors::skills::SkillManager;
use crate::application::interactors::subjects::SubjectManager;
use crate::infra::state::{AppState, FromAppState};

const PROMPT: &[u8] = b"> ";

pub fn create_dashboard(state: &AppState) -> Dashboard {
    Dashboard::new(
        SessionManager::from_app_state(state),
        SkillManager::from_app_state(state),
        SubjectManager::from_app_state(state),
        ChatInteractor::from_app_state(state),
        GetRecommendationsInteractor::from_app_state(state),
        state.toasts.clone(),
    )
}

async fn write_lines<W>(output: &mut W, lines: &[String]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    Ok(())
}

/// Reads commands until `quit` or end of input.
pub async fn run_console<R, W>(mut dashboard: Dashboard, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_lines(&mut output, &dashboard.greeting()).await?;
    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT).await?;
        output.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let reply = dashboard.handle_line(&line).await;
        write_lines(&mut output, &reply.lines).await?;
        if reply.quit {
            break;
        }
    }
    output.flush().await?;
    info!("Console session finished");
    Ok(())
}
