//! Static indicator table.
//!
//! Every supported series is described once here; the rest of the crate
//! dispatches on the [`Indicator`] enum instead of matching on raw name
//! strings.

use crate::error::SeriesError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Publication frequency of the upstream series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    Quarterly,
}

/// One supported macroeconomic indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// EMAE, monthly economic activity estimator (proxy for GDP).
    Activity,
    /// IPC, consumer price index, general level.
    Inflation,
    /// Urban unemployment rate, published quarterly.
    Unemployment,
    /// Official wholesale exchange rate, ARS per USD.
    ExchangeRate,
}

/// Immutable description of an indicator: display name, upstream series id
/// and publication frequency. Built at compile time, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec {
    pub name: &'static str,
    pub source_id: &'static str,
    pub frequency: Frequency,
    pub definition: &'static str,
}

const ACTIVITY_SPEC: IndicatorSpec = IndicatorSpec {
    name: "PBI (EMAE)",
    source_id: "143.3_EMAE_0_0_26",
    frequency: Frequency::Monthly,
    definition: "Bienes y servicios de demanda final producidos dentro de una economía \
                 durante un período determinado (EMAE, base 2004=100).",
};

const INFLATION_SPEC: IndicatorSpec = IndicatorSpec {
    name: "Inflación (IPC)",
    source_id: "148.3_I2NG_2016_M_15",
    frequency: Frequency::Monthly,
    definition: "Aumento sostenido en el tiempo del nivel general de precios \
                 (IPC nivel general, base dic-2016=100).",
};

const UNEMPLOYMENT_SPEC: IndicatorSpec = IndicatorSpec {
    name: "Desempleo",
    source_id: "101.1_IUT_T_0_0_30",
    frequency: Frequency::Quarterly,
    definition: "Porcentaje de la población económicamente activa que no tiene \
                 trabajo y lo busca activamente (tasa urbana trimestral).",
};

const EXCHANGE_RATE_SPEC: IndicatorSpec = IndicatorSpec {
    name: "Tipo de cambio",
    source_id: "32.1_DOLAR_OFICIAL_0_0_16",
    frequency: Frequency::Monthly,
    definition: "Cantidad de pesos necesarios para obtener un dólar estadounidense \
                 (dólar oficial mayorista, fin de mes).",
};

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Activity,
        Indicator::Inflation,
        Indicator::Unemployment,
        Indicator::ExchangeRate,
    ];

    pub fn spec(&self) -> &'static IndicatorSpec {
        match self {
            Indicator::Activity => &ACTIVITY_SPEC,
            Indicator::Inflation => &INFLATION_SPEC,
            Indicator::Unemployment => &UNEMPLOYMENT_SPEC,
            Indicator::ExchangeRate => &EXCHANGE_RATE_SPEC,
        }
    }
}

impl Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spec().name)
    }
}

impl FromStr for Indicator {
    type Err = SeriesError;

    /// Accepts the common Spanish names and acronyms, case-insensitively and
    /// without accents ("pbi", "emae", "inflacion", "ipc", "desempleo",
    /// "tipo-de-cambio", "dolar", "tcn").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' => 'u',
                ' ' | '_' => '-',
                other => other,
            })
            .collect();

        match normalized.as_str() {
            "pbi" | "emae" | "actividad" => Ok(Indicator::Activity),
            "inflacion" | "ipc" => Ok(Indicator::Inflation),
            "desempleo" | "desocupacion" => Ok(Indicator::Unemployment),
            "tipo-de-cambio" | "dolar" | "tcn" => Ok(Indicator::ExchangeRate),
            _ => Err(SeriesError::UnknownIndicator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_alias() {
        assert_eq!("EMAE".parse::<Indicator>().unwrap(), Indicator::Activity);
        assert_eq!("pbi".parse::<Indicator>().unwrap(), Indicator::Activity);
        assert_eq!("IPC".parse::<Indicator>().unwrap(), Indicator::Inflation);
        assert_eq!(
            "Inflación".parse::<Indicator>().unwrap(),
            Indicator::Inflation
        );
        assert_eq!(
            "desempleo".parse::<Indicator>().unwrap(),
            Indicator::Unemployment
        );
        assert_eq!(
            "Tipo de cambio".parse::<Indicator>().unwrap(),
            Indicator::ExchangeRate
        );
        assert_eq!(
            "dolar".parse::<Indicator>().unwrap(),
            Indicator::ExchangeRate
        );
    }

    #[test]
    fn test_unknown_indicator() {
        let err = "bitcoin".parse::<Indicator>().unwrap_err();
        assert!(matches!(err, SeriesError::UnknownIndicator(name) if name == "bitcoin"));
    }

    #[test]
    fn test_spec_table() {
        assert_eq!(Indicator::ALL.len(), 4);
        assert_eq!(
            Indicator::Unemployment.spec().frequency,
            Frequency::Quarterly
        );
        assert_eq!(Indicator::Activity.spec().source_id, "143.3_EMAE_0_0_26");
        for ind in Indicator::ALL {
            assert!(!ind.spec().source_id.is_empty());
            assert!(!ind.spec().definition.is_empty());
        }
    }
}
