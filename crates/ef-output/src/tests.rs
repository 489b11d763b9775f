//! Tests for ef-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PathPointRow, ZoneRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_paths.csv").exists());
        assert!(dir.path().join("zone_occupancy.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_paths.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "step", "x", "y"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("zone_occupancy.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["bx", "by", "x", "y", "visits"]);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_path(&[
            PathPointRow { agent_id: 4, step: 0, x: 0.0, y: 0.0 },
            PathPointRow { agent_id: 4, step: 1, x: 0.5, y: 0.0 },
        ])
        .unwrap();
        w.write_zones(&[ZoneRow { bx: -1, by: 2, x: -5.0, y: 10.0, visits: 17 }]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_paths.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "4");
        assert_eq!(&rows[1][2], "0.5");

        let mut rdr = csv::Reader::from_path(dir.path().join("zone_occupancy.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "-1");
        assert_eq!(&rows[0][2], "-5");
        assert_eq!(&rows[0][4], "17");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use ef_core::{FlowConfig, Point, SimRng};
    use ef_layout::{BuffetStation, Layout};
    use ef_sim::FlowSimulator;

    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, PathPointRow, WalkOutputObserver, ZoneRow};

    /// 0 → 10 → 10 → 0 along the x axis; 40 transit steps per agent.
    fn corridor() -> Layout {
        Layout {
            tables:      vec![Point::new(10.0, 0.0)],
            buffets:     vec![BuffetStation { x: 10.0, y: 0.0, length_ft: None }],
            entry:       Point::new(0.0, 0.0),
            exit:        Point::new(0.0, 0.0),
            venue_sq_ft: 400.0,
        }
    }

    #[test]
    fn simulation_output_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = FlowConfig::with_seed(3);
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = WalkOutputObserver::new(writer, config.zone_size);

        let sim = FlowSimulator::new(config).unwrap();
        sim.simulate(&corridor(), 10, 2.0, &mut SimRng::new(3), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_paths.csv")).unwrap();
        // spawn point + 40 transit steps + 3 arrivals, for 10 agents
        assert_eq!(rdr.records().count(), 10 * 44);

        let mut rdr = csv::Reader::from_path(dir.path().join("zone_occupancy.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        // busiest first: zone (1, 0) with 20 visits per agent
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][2], "5");
        assert_eq!(&rows[0][4], "200");
    }

    struct FailingWriter {
        finished: bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_path(&mut self, _rows: &[PathPointRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn write_zones(&mut self, _rows: &[ZoneRow]) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut obs = WalkOutputObserver::new(FailingWriter { finished: false }, 5.0);
        let sim = FlowSimulator::new(FlowConfig::default()).unwrap();
        sim.simulate(&corridor(), 10, 2.0, &mut SimRng::new(0), &mut obs).unwrap();

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().finished);
    }
}
