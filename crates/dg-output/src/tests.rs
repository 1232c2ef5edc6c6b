//! Integration tests for dg-output.

#[cfg(test)]
mod csv_tests {
    use dg_core::Cell;
    use dg_sim::ReplanReason;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, DELIVERY_HEADER, TICK_HEADER};
    use crate::row::{DeliveryRow, TickRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn tick_row(tick: u64) -> TickRow {
        TickRow {
            tick,
            agent:           Cell::new(1, 2),
            target:          Some(Cell::new(3, 3)),
            path_len:        3,
            replanned:       Some(ReplanReason::Blocked),
            moved:           true,
            distance:        tick + 1,
            deliveries_done: 0,
            remaining:       2,
        }
    }

    fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("ticks.csv").exists());
        assert!(dir.path().join("deliveries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("ticks.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, TICK_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, DELIVERY_HEADER);
    }

    #[test]
    fn csv_tick_row_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick(&tick_row(7)).unwrap();
        w.write_tick(&TickRow { target: None, replanned: None, moved: false, ..tick_row(8) }).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("ticks.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "7");       // tick
        assert_eq!(&rows[0][1], "1");       // agent_x
        assert_eq!(&rows[0][2], "2");       // agent_y
        assert_eq!(&rows[0][3], "3");       // target_x
        assert_eq!(&rows[0][6], "blocked");
        assert_eq!(&rows[0][7], "1");       // moved
        assert_eq!(&rows[0][8], "8");       // distance
        assert_eq!(&rows[1][3], "");        // no target
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][6], "");        // no replan
        assert_eq!(&rows[1][7], "0");
    }

    #[test]
    fn csv_delivery_row_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_delivery(&DeliveryRow { tick: 4, cell: Cell::new(2, 0), remaining: 1, distance: 5 }).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("deliveries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["4", "2", "0", "1", "5"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use dg_core::{Cell, SimConfig};
    use dg_obstacles::Stationary;
    use dg_path::AStar;
    use dg_sim::{Layout, SimBuilder};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::TraceObserver;
    use crate::row::{DeliveryRow, TickRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn small_sim() -> dg_sim::Sim<AStar, Stationary> {
        let config = SimConfig { grid_size: 3, static_obstacles: 0, moving_obstacles: 0, ..SimConfig::default() };
        SimBuilder::new(config, AStar, Stationary)
            .layout(Layout {
                deliveries: vec![Cell::new(2, 0), Cell::new(2, 2)],
                ..Layout::default()
            })
            .build()
            .unwrap()
    }

    /// Keeps rows in memory; fails every write after `fail_after` ticks.
    #[derive(Default)]
    struct MemWriter {
        ticks:      Vec<TickRow>,
        deliveries: Vec<DeliveryRow>,
        finishes:   usize,
        fail_after: Option<usize>,
    }

    impl OutputWriter for MemWriter {
        fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
            if self.fail_after.is_some_and(|n| self.ticks.len() >= n) {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.ticks.push(*row);
            Ok(())
        }

        fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
            self.deliveries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_follow_the_run() {
        let mut sim = small_sim();
        let mut obs = TraceObserver::new(MemWriter::default());
        let summary = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        // (0,0) → (2,0) in 2, then (2,0) → (2,2) in 2.
        assert_eq!(summary.ticks, 4);
        assert_eq!(w.ticks.len(), 4);
        assert_eq!(w.finishes, 1);
        assert_eq!(
            w.deliveries,
            vec![
                DeliveryRow { tick: 1, cell: Cell::new(2, 0), remaining: 1, distance: 2 },
                DeliveryRow { tick: 3, cell: Cell::new(2, 2), remaining: 0, distance: 4 },
            ]
        );

        let last = w.ticks[3];
        assert_eq!(last.agent, Cell::new(2, 2));
        assert_eq!(last.target, None);
        assert_eq!(last.deliveries_done, 2);
        assert_eq!(last.remaining, 0);
        assert!(w.ticks.iter().all(|r| r.moved));
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = small_sim();
        let mut obs = TraceObserver::new(MemWriter { fail_after: Some(1), ..MemWriter::default() });
        sim.run(&mut obs);

        let err = obs.take_error().expect("write error stored");
        assert!(matches!(err, OutputError::Io(_)));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().ticks.len(), 1);
    }

    #[test]
    fn integration_csv() {
        let mut sim = small_sim();
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("ticks.csv")).unwrap();
        let ticks: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(ticks.len(), 4);

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let deliveries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(deliveries.len(), 2);
        assert_eq!(&deliveries[1][1], "2");
        assert_eq!(&deliveries[1][2], "2");
    }
}
