//! Embedded fallback datasets.
//!
//! Compiled-in 2022–2024 snapshots of the four indicators, so the app keeps
//! working offline and in classrooms with no network. Used only when
//! explicitly requested or when every other source has failed.

use crate::core::RawObservation;
use crate::error::SourceUnavailable;
use crate::sources::SeriesSource;
use async_trait::async_trait;
use tracing::debug;

/// EMAE, monthly activity estimator (base 2004=100), Jan 2022 – Dec 2024.
const EMAE: &[(&str, f64)] = &[
    ("2022-01-01", 139.5),
    ("2022-02-01", 138.0),
    ("2022-03-01", 153.9),
    ("2022-04-01", 156.1),
    ("2022-05-01", 163.1),
    ("2022-06-01", 163.9),
    ("2022-07-01", 164.1),
    ("2022-08-01", 164.1),
    ("2022-09-01", 160.4),
    ("2022-10-01", 159.9),
    ("2022-11-01", 158.4),
    ("2022-12-01", 158.8),
    ("2023-01-01", 153.3),
    ("2023-02-01", 155.1),
    ("2023-03-01", 155.4),
    ("2023-04-01", 149.1),
    ("2023-05-01", 152.7),
    ("2023-06-01", 151.6),
    ("2023-07-01", 149.0),
    ("2023-08-01", 150.7),
    ("2023-09-01", 147.5),
    ("2023-10-01", 146.7),
    ("2023-11-01", 145.5),
    ("2023-12-01", 145.0),
    ("2024-01-01", 137.3),
    ("2024-02-01", 133.8),
    ("2024-03-01", 142.4),
    ("2024-04-01", 145.5),
    ("2024-05-01", 154.8),
    ("2024-06-01", 145.4),
    ("2024-07-01", 148.2),
    ("2024-08-01", 146.0),
    ("2024-09-01", 143.7),
    ("2024-10-01", 146.0),
    ("2024-11-01", 146.1),
    ("2024-12-01", 146.0),
];

/// IPC, general level (base dic-2016=100), Jan 2022 – Dec 2024.
const IPC: &[(&str, f64)] = &[
    ("2022-01-01", 605.0317),
    ("2022-02-01", 633.4341),
    ("2022-03-01", 676.0566),
    ("2022-04-01", 716.9399),
    ("2022-05-01", 753.147),
    ("2022-06-01", 790.0339),
    ("2022-07-01", 848.1981),
    ("2022-08-01", 906.0927),
    ("2022-09-01", 961.026),
    ("2022-10-01", 1021.4317),
    ("2022-11-01", 1074.5121),
    ("2022-12-01", 1130.1678),
    ("2023-01-01", 1203.0185),
    ("2023-02-01", 1262.3126),
    ("2023-03-01", 1381.1601),
    ("2023-04-01", 1497.2147),
    ("2023-05-01", 1613.5895),
    ("2023-06-01", 1709.6115),
    ("2023-07-01", 1818.0838),
    ("2023-08-01", 2044.2832),
    ("2023-09-01", 2304.9242),
    ("2023-10-01", 2496.273),
    ("2023-11-01", 2816.0628),
    ("2023-12-01", 3533.1922),
    ("2024-01-01", 4261.5324),
    ("2024-02-01", 4825.79),
    ("2024-03-01", 5357.09),
    ("2024-04-01", 5830.23),
    ("2024-05-01", 6073.72),
    ("2024-06-01", 6351.71),
    ("2024-07-01", 6607.75),
    ("2024-08-01", 6883.44),
    ("2024-09-01", 7122.24),
    ("2024-10-01", 7313.95),
    ("2024-11-01", 7491.43),
    ("2024-12-01", 7694.01),
];

/// Official wholesale exchange rate, ARS/USD, Jan 2022 – Dec 2024.
const DOLAR: &[(&str, f64)] = &[
    ("2022-01-01", 103.9846),
    ("2022-02-01", 106.3071),
    ("2022-03-01", 109.4585),
    ("2022-04-01", 113.3345),
    ("2022-05-01", 117.7737),
    ("2022-06-01", 122.6234),
    ("2022-07-01", 129.7928),
    ("2022-08-01", 137.5014),
    ("2022-09-01", 144.5326),
    ("2022-10-01", 152.8706),
    ("2022-11-01", 160.1581),
    ("2022-12-01", 170.9467),
    ("2023-01-01", 182.4677),
    ("2023-02-01", 192.9011),
    ("2023-03-01", 203.1055),
    ("2023-04-01", 216.5559),
    ("2023-05-01", 231.1908),
    ("2023-06-01", 248.7617),
    ("2023-07-01", 266.4647),
    ("2023-08-01", 322.1341),
    ("2023-09-01", 349.998),
    ("2023-10-01", 350.0204),
    ("2023-11-01", 353.8404),
    ("2023-12-01", 799.95),
    ("2024-01-01", 818.3455),
    ("2024-02-01", 834.91),
    ("2024-03-01", 850.34),
    ("2024-04-01", 868.96),
    ("2024-05-01", 886.86),
    ("2024-06-01", 903.78),
    ("2024-07-01", 923.77),
    ("2024-08-01", 942.92),
    ("2024-09-01", 961.83),
    ("2024-10-01", 981.57),
    ("2024-11-01", 1001.84),
    ("2024-12-01", 1020.71),
];

/// Urban unemployment rate, quarterly, 2022Q1 – 2024Q4.
const DESEMPLEO: &[(&str, f64)] = &[
    ("2022-01-01", 7.0),
    ("2022-04-01", 6.9),
    ("2022-07-01", 7.1),
    ("2022-10-01", 6.3),
    ("2023-01-01", 6.9),
    ("2023-04-01", 6.2),
    ("2023-07-01", 5.7),
    ("2023-10-01", 5.7),
    ("2024-01-01", 7.7),
    ("2024-04-01", 7.6),
    ("2024-07-01", 6.9),
    ("2024-10-01", 6.4),
];

fn dataset_for(source_id: &str) -> Option<&'static [(&'static str, f64)]> {
    match source_id {
        "143.3_EMAE_0_0_26" => Some(EMAE),
        "148.3_I2NG_2016_M_15" => Some(IPC),
        "32.1_DOLAR_OFICIAL_0_0_16" => Some(DOLAR),
        "101.1_IUT_T_0_0_30" => Some(DESEMPLEO),
        _ => None,
    }
}

#[derive(Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeriesSource for EmbeddedSource {
    fn name(&self) -> &'static str {
        "embedded"
    }

    async fn fetch(&self, source_id: &str) -> Result<Vec<RawObservation>, SourceUnavailable> {
        let dataset = dataset_for(source_id).ok_or_else(|| {
            SourceUnavailable::new(self.name(), format!("no embedded dataset for {source_id}"))
        })?;
        debug!(source_id, rows = dataset.len(), "Serving embedded dataset");
        Ok(dataset
            .iter()
            .map(|(token, value)| RawObservation::new(*token, value.to_string()))
            .collect())
    }
}
