//! Console channel — reads lines from stdin, resolves them through the
//! [`ChatEngine`], and prints role-tagged replies to stdout.
//!
//! The UI blocks on the one outstanding completion call per submission;
//! there is no queuing and no cancellation of an in-flight request. Runs
//! until the `shutdown` token is cancelled (Ctrl-C) or stdin is closed.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::chat::{ChatEngine, Reply};
use crate::error::AppError;
use crate::session::{Role, Session, Turn};

fn role_label(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "you",
        Role::Assistant => "assistant",
    }
}

/// Print the transcript's visible turns in order. The system turn is part
/// of the transcript but not part of the chat display.
fn render_transcript(session: &Session) {
    for turn in session.transcript() {
        if turn.role == Role::System {
            continue;
        }
        println!("{}> {}", role_label(turn.role), turn.content);
    }
}

/// Interactive loop for one session.
pub async fn run(
    mut session: Session,
    engine: ChatEngine,
    bot_name: &str,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    info!(session_id = %session.id, language = %session.language(), "console channel started");
    println!("─────────────────────────────────");
    println!(" {bot_name} console  ({})  Ctrl-C to quit", session.language());
    println!("─────────────────────────────────");
    render_transcript(&session);

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("you> ");
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                println!("\n[console] shutdown signal received — closing session");
                info!("console channel shutting down");
                break;
            }

            line = lines.next_line() => {
                match line {
                    Err(e) => {
                        warn!("console read error: {e}");
                        break;
                    }
                    Ok(None) => {
                        info!("console stdin closed");
                        break;
                    }
                    Ok(Some(input)) => {
                        let input = input.trim().to_string();
                        if input.is_empty() { continue; }

                        debug!(input = %input, "console received line");
                        exchange(&mut session, &engine, &input).await;
                    }
                }
            }
        }
    }

    Ok(())
}

/// One exchange: append the user turn, resolve a reply, append the
/// assistant turn only on success. A failed exchange leaves the user turn
/// as the transcript's last entry and the session stays usable.
async fn exchange(session: &mut Session, engine: &ChatEngine, input: &str) {
    // Snapshot before appending so the request carries prior history plus
    // the new utterance exactly once.
    let window = session.window_snapshot();
    session.append(Turn::user(input));

    println!("[thinking…]");
    match engine.respond(session.system_prompt(), &window, input).await {
        Ok(reply) => {
            let text = reply.text().to_string();
            if let Reply::Refused(_) = reply {
                debug!("refusal substituted for remote call");
            }
            session.append(Turn::assistant(text.clone()));
            println!("assistant> {text}");
        }
        Err(e) => {
            warn!(error = %e, "exchange failed");
            println!("[error] could not generate a response: {e}");
        }
    }
}
