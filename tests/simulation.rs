use ffsim::{Block, Coalesce, Error, Script, Simulation};

#[test]
fn end_to_end_scenario() -> anyhow::Result<()> {
    let script = Script::parse("100\nREQUEST A 30\nREQUEST B 40\nRELEASE A\nREQUEST C 20\n")?;
    let sim = Simulation::run(script, Coalesce::Never)?;
    let allocator = sim.allocator();

    assert_eq!(
        allocator.blocks().as_slice(),
        &[
            Block::allocated(0, 20, "C"),
            Block::free(20, 10),
            Block::allocated(30, 40, "B"),
            Block::free(70, 30),
        ]
    );

    let ends: Vec<_> = allocator.blocks().iter().map(Block::end).collect();
    assert_eq!(ends, vec![19, 29, 69, 99]);

    assert_eq!(allocator.successful_allocations(), 3);
    assert_eq!(allocator.failed_allocations(), 0);
    assert!(sim.outcomes().iter().all(|o| o.is_success()));

    Ok(())
}

#[test]
fn fragmentation_scenario() -> anyhow::Result<()> {
    let script = Script::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/fragmented.txt"))?;
    let sim = Simulation::run(script, Coalesce::Never)?;
    let stats = sim.allocator().statistics();

    // A 64 | G 16 | free 16 | C 64 | free 32 | E 64, F never fits.
    assert_eq!(sim.allocator().successful_allocations(), 6);
    assert_eq!(sim.allocator().failed_allocations(), 1);
    assert_eq!(stats.free_memory, 48);
    assert_eq!(stats.largest_free_block, 32);
    assert_eq!(stats.num_free_blocks, 2);
    assert!((stats.external_fragmentation - 100.0 / 3.0).abs() < 1e-9);

    let failures: Vec<_> = sim
        .outcomes()
        .iter()
        .filter(|o| !o.is_success())
        .map(|o| o.to_string())
        .collect();
    assert_eq!(
        failures,
        vec![
            "REQUEST F 48 KB → FAIL (insufficient memory)",
            "RELEASE Z → FAIL (process not found)",
        ]
    );

    Ok(())
}

#[test]
fn coalescing_is_opt_in() -> anyhow::Result<()> {
    let content = "90\nREQUEST A 30\nREQUEST B 30\nREQUEST C 30\nRELEASE A\nRELEASE B\nREQUEST D 60\n";

    let plain = Simulation::run(Script::parse(content)?, Coalesce::Never)?;
    assert_eq!(plain.allocator().failed_allocations(), 1);
    assert_eq!(plain.allocator().statistics().num_free_blocks, 2);

    let merged = Simulation::run(Script::parse(content)?, Coalesce::Adjacent)?;
    assert_eq!(merged.allocator().failed_allocations(), 0);
    assert_eq!(
        merged.allocator().blocks().as_slice(),
        &[Block::allocated(0, 60, "D"), Block::allocated(60, 30, "C")]
    );

    Ok(())
}

#[test]
fn malformed_script_is_rejected_before_running() {
    let err = Script::parse("100\nREQUEST A 30\nFREE A\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 3, .. }));
    assert!(err.is_fatal());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Script::from_path(dir.path().join("missing.txt")).unwrap_err();

    assert!(matches!(err, Error::IO(_)));
}
