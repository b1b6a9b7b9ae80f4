#![cfg(test)]
use reachr_common::network::target::{Target, default_targets};
use reachr_common::probe::status_line;
use reachr_core::flag::EchoCountFlag;
use reachr_core::prober::PingProber;
use reachr_core::sweep::{self, Tally};

async fn collect_lines(targets: &[Target], prober: &PingProber) -> (Vec<String>, Tally) {
    let mut lines = Vec::new();
    let tally = sweep::sweep(targets, prober, |t, s| {
        lines.push(status_line(t, s));
        Ok(())
    })
    .await
    .expect("sweep should not fail when the sink succeeds");
    (lines, tally)
}

/// When the ping executable cannot be found every address reports an error
/// and the sweep still produces one line per address.
#[tokio::test]
async fn missing_ping_reports_error_for_every_address() {
    let prober = PingProber::new(EchoCountFlag::host()).with_program("reachr-missing-ping");
    let targets = default_targets();

    let (lines, tally) = collect_lines(&targets, &prober).await;

    assert_eq!(lines.len(), targets.len());
    for (line, target) in lines.iter().zip(&targets) {
        let prefix = format!("{} is ERROR: ", target.address);
        assert!(line.starts_with(&prefix), "unexpected line: {line}");
        assert!(line.len() > prefix.len(), "error description is empty");
    }
    assert_eq!(tally.errors, targets.len());
}

#[cfg(unix)]
mod unix {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Stand-in for `ping`: logs its arguments and answers only for `up`.
    struct FakePing {
        dir: PathBuf,
    }

    impl FakePing {
        fn install(name: &str, up: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("reachr-{name}-{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();

            let script = format!(
                "#!/bin/sh\necho \"$@\" >> '{log}'\n[ \"$3\" = '{up}' ] && exit 0\nexit 1\n",
                log = dir.join("calls.log").display(),
            );
            let program = dir.join("ping");
            fs::write(&program, script).unwrap();
            fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

            Self { dir }
        }

        fn program(&self) -> PathBuf {
            self.dir.join("ping")
        }

        fn calls(&self) -> Vec<String> {
            read_lines(&self.dir.join("calls.log"))
        }
    }

    impl Drop for FakePing {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn reachable_then_unreachable_keeps_order() {
        let fake = FakePing::install("order", "10.219.161.15");
        let prober = PingProber::new(EchoCountFlag::Posix)
            .with_program(fake.program().display().to_string());
        let targets = vec![Target::new("10.219.161.15"), Target::new("10.166.52.22")];

        let (lines, tally) = collect_lines(&targets, &prober).await;

        assert_eq!(lines, ["10.219.161.15 is ONLINE", "10.166.52.22 is OFFLINE"]);
        assert_eq!(tally, Tally { online: 1, offline: 1, errors: 0 });
    }

    #[tokio::test]
    async fn one_invocation_per_address_with_same_flag() {
        let fake = FakePing::install("calls", "127.0.0.1");
        let prober = PingProber::new(EchoCountFlag::Posix)
            .with_program(fake.program().display().to_string());
        let targets = vec![
            Target::new("127.0.0.1"),
            Target::new("10.255.255.1"),
            Target::new("127.0.0.1"),
        ];

        let (lines, _) = collect_lines(&targets, &prober).await;

        assert_eq!(
            fake.calls(),
            ["-c 1 127.0.0.1", "-c 1 10.255.255.1", "-c 1 127.0.0.1"]
        );
        assert_eq!(
            lines,
            ["127.0.0.1 is ONLINE", "10.255.255.1 is OFFLINE", "127.0.0.1 is ONLINE"]
        );
    }

    #[tokio::test]
    async fn single_reachable_host() {
        let prober = PingProber::new(EchoCountFlag::Posix).with_program("true");
        let (lines, _) = collect_lines(&[Target::new("127.0.0.1")], &prober).await;
        assert_eq!(lines, ["127.0.0.1 is ONLINE"]);
    }

    #[tokio::test]
    async fn single_unreachable_host() {
        let prober = PingProber::new(EchoCountFlag::Posix).with_program("false");
        let (lines, tally) = collect_lines(&[Target::new("10.255.255.1")], &prober).await;
        assert_eq!(lines, ["10.255.255.1 is OFFLINE"]);
        assert_eq!(tally.offline, 1);
    }
}
