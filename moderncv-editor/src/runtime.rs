use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::command::EditorCommand;
use crate::error::{io_err, EditorError};
use crate::session::Session;

const OUTPUT: &str = "<output>";
const INPUT: &str = "<input>";

/// Build a runtime and drive `session` from `script` (stdin when `None`),
/// printing replies to stdout.
pub fn start_blocking(session: &mut Session, script: Option<&Path>) -> Result<(), EditorError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    runtime.block_on(async {
        let mut stdout = std::io::stdout().lock();
        match script {
            Some(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| io_err(path, e))?;
                run_session(session, BufReader::new(file), &mut stdout).await
            }
            None => run_session(session, BufReader::new(tokio::io::stdin()), &mut stdout).await,
        }
    })
}

/// Read commands line by line while picture decodes complete in the
/// background. Returns once input ends or `quit` is read, after every
/// in-flight decode has been settled.
pub async fn run_session<R, W>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> Result<(), EditorError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| io_err(INPUT, e))? else {
                    tracing::debug!("end of input");
                    break;
                };
                if handle_line(session, &line, output).await? {
                    break;
                }
            }
            completion = session.next_picture(), if session.pending_pictures() > 0 => {
                if let Some(report) = session.on_picture(completion?) {
                    emit(output, &report)?;
                }
            }
        }
    }

    for report in session.drain_pictures().await? {
        emit(output, &report)?;
    }
    output.flush().map_err(|e| io_err(OUTPUT, e))?;
    Ok(())
}

/// Returns `true` when the session should end.
async fn handle_line<W: Write>(
    session: &mut Session,
    line: &str,
    output: &mut W,
) -> Result<bool, EditorError> {
    let cmd = match EditorCommand::parse(line) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return Ok(false),
        Err(err) => {
            emit(output, &format!("error: {err}"))?;
            return Ok(false);
        }
    };

    match session.apply(cmd).await {
        Ok(response) => {
            for text in &response.lines {
                emit(output, text)?;
            }
            Ok(response.quit)
        }
        Err(err) => {
            tracing::debug!(%err, line, "command failed");
            emit(output, &format!("error: {err}"))?;
            Ok(false)
        }
    }
}

fn emit<W: Write>(output: &mut W, text: &str) -> Result<(), EditorError> {
    writeln!(output, "{text}").map_err(|e| io_err(OUTPUT, e))
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tempfile::TempDir;

    use crate::config::EditorConfig;

    async fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_session(session, script.as_bytes(), &mut out)
            .await
            .expect("session");
        String::from_utf8(out).expect("utf8")
    }

    fn session() -> Session {
        Session::new(&EditorConfig::default()).expect("session")
    }

    #[tokio::test]
    async fn scripted_edits_are_applied_in_order() {
        let mut s = session();
        let out = run_script(
            &mut s,
            "# rename\nset name John Roe\n\nadd education\nset education 2 degree PhD\nremove experience 0\nskills Rust, Go\n",
        )
        .await;

        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "ok",
                "added education 2",
                "ok",
                "removed experience 0",
                "skills: Rust, Go"
            ]
        );
        let doc = s.document();
        assert_eq!(doc.personal_info.name, "John Roe");
        assert_eq!(doc.education[2].degree, "PhD");
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.skills, vec!["Rust", "Go"]);
    }

    #[tokio::test]
    async fn bad_lines_are_reported_and_session_continues() {
        let mut s = session();
        let out = run_script(&mut s, "frobnicate\nset title Architect\n").await;
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("error: unknown command 'frobnicate'"));
        assert_eq!(lines[1], "ok");
        assert_eq!(s.document().personal_info.title, "Architect");
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut s = session();
        run_script(&mut s, "quit\nset name Never\n").await;
        assert_eq!(s.document().personal_info.name, "Jane Doe");
    }

    #[tokio::test]
    async fn pending_picture_settles_before_exit() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.gif");
        std::fs::write(&first, b"\x89PNG\r\n\x1a\n0000").unwrap();
        std::fs::write(&second, b"GIF89a\x01\x00\x01\x00").unwrap();

        let mut s = session();
        let script = format!(
            "picture {}\npicture {}\nset name Still Editable\n",
            first.display(),
            second.display()
        );
        let out = run_script(&mut s, &script).await;

        assert!(out.contains("picture #2 applied"));
        assert!(s
            .document()
            .personal_info
            .profile_picture
            .starts_with("data:image/gif;base64,"));
        assert_eq!(s.document().personal_info.name, "Still Editable");
        assert_eq!(s.pending_pictures(), 0);
    }

    #[tokio::test]
    async fn set_picture_after_upload_keeps_the_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.gif");
        std::fs::write(&path, b"GIF89a\x01\x00\x01\x00").unwrap();

        let mut s = session();
        let script = format!(
            "picture {}\nset picture https://example.com/new.png\n",
            path.display()
        );
        let out = run_script(&mut s, &script).await;

        assert!(out.contains("picture #1 loading"));
        assert_eq!(
            s.document().personal_info.profile_picture,
            "https://example.com/new.png"
        );
        assert_eq!(s.pending_pictures(), 0);
    }

    #[tokio::test]
    async fn completion_arrives_while_input_is_idle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("me.gif");
        std::fs::write(&path, b"GIF89a\x01\x00\x01\x00").unwrap();

        let mut s = session();
        let reader = tokio_test::io::Builder::new()
            .read(format!("picture {}\n", path.display()).as_bytes())
            .wait(Duration::from_millis(200))
            .read(b"show --json\n")
            .build();
        let mut out = Vec::new();
        run_session(&mut s, BufReader::new(reader), &mut out)
            .await
            .expect("session");
        let out = String::from_utf8(out).unwrap();

        let applied = out.find("picture #1 applied").expect("applied line");
        let shown = out.find("\"personalInfo\"").expect("json");
        assert!(applied < shown, "picture applied while waiting for input");
        assert!(out.contains("data:image/gif;base64,"));
    }
}
