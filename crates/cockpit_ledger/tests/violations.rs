//! Contract violations end the whole process, not just the thread that
//! hit them. Each case re-runs itself in a child process and checks that
//! the child dies instead of exiting normally.

use cockpit_ledger::{CallSite, InstanceId, Ledger, Token};
use std::process::{Command, ExitStatus};
use std::thread;

static LOADER_TEXTURES: Token = Token::new("loader_textures");

const CHILD_ENV: &str = "COCKPIT_LEDGER_VIOLATION_CHILD";

fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_in_child(test: &str) -> ExitStatus {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test, "--exact", "--test-threads=1", "--nocapture"])
        .env(CHILD_ENV, "1")
        .status()
        .expect("spawn child test process")
}

#[test]
fn leak_found_by_worker_fini_kills_the_process() {
    if in_child() {
        let ledger = Ledger::new();
        ledger.init();
        let site = CallSite::new("loader.rs", 12);
        ledger.alloc_bytes(&LOADER_TEXTURES, None, site, 512);

        let _ = thread::spawn(move || ledger.fini()).join();
        // reached only if the leak was survivable
        std::process::exit(0);
    }

    let status = run_in_child("leak_found_by_worker_fini_kills_the_process");
    assert!(!status.success(), "leaking child exited with {status}");
}

#[test]
fn underflow_on_worker_thread_kills_the_process() {
    if in_child() {
        let ledger = Ledger::new();
        ledger.init();
        let texture = Some(InstanceId::from_raw(7));
        let site = CallSite::new("loader.rs", 20);
        ledger.alloc_bytes(&LOADER_TEXTURES, texture, site, 64);

        let _ = thread::spawn(move || ledger.free_bytes(&LOADER_TEXTURES, texture, 65)).join();
        std::process::exit(0);
    }

    let status = run_in_child("underflow_on_worker_thread_kills_the_process");
    assert!(!status.success(), "underflowing child exited with {status}");
}

#[test]
fn clean_fini_exits_normally() {
    if in_child() {
        let ledger = Ledger::new();
        ledger.init();
        let site = CallSite::new("loader.rs", 30);
        ledger.alloc_bytes(&LOADER_TEXTURES, None, site, 128);
        ledger.free_bytes(&LOADER_TEXTURES, None, 128);

        thread::spawn(move || ledger.fini())
            .join()
            .expect("clean fini");
        std::process::exit(0);
    }

    let status = run_in_child("clean_fini_exits_normally");
    assert!(status.success(), "clean child exited with {status}");
}
