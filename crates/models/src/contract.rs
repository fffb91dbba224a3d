use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the public contracts dataset. Every column is carried as text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ContractRecord {
    pub fecha: String,
    pub centro_seccion: String,
    pub nreg: String,
    pub nexp: String,
    pub objeto: String,
    pub tipo: String,
    pub procedimiento: String,
    pub numlicit: String,
    pub numinvitcurs: String,
    pub proc_adjud: String,
    pub presupuesto_con_iva: String,
    pub valor_estimado: String,
    pub importe_adj_con_iva: String,
    pub adjuducatario: String,
    pub fecha_formalizacion: String,
    #[serde(rename = "I_G")]
    pub i_g: String,
}

/// Header names a dataset must carry, in file order.
pub const CONTRACT_COLUMNS: [&str; 16] = [
    "fecha",
    "centro_seccion",
    "nreg",
    "nexp",
    "objeto",
    "tipo",
    "procedimiento",
    "numlicit",
    "numinvitcurs",
    "proc_adjud",
    "presupuesto_con_iva",
    "valor_estimado",
    "importe_adj_con_iva",
    "adjuducatario",
    "fecha_formalizacion",
    "I_G",
];

/// Placeholder written into cells that are missing in the source.
pub const MISSING_CELL: &str = "0";

/// Cell values read as "no value", same set pandas uses by default.
const NA_TOKENS: [&str; 19] = [
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "None",
    "n/a",
    "nan",
    "null",
];

/// True when `cell` counts as missing. Matching is exact, so padded values are kept.
pub fn is_missing(cell: &str) -> bool {
    NA_TOKENS.contains(&cell)
}

impl ContractRecord {
    /// Replaces empty and NA-marker cells with [`MISSING_CELL`].
    pub fn fill_missing(mut self) -> Self {
        for cell in self.cells_mut() {
            if is_missing(cell) {
                *cell = MISSING_CELL.to_string();
            }
        }
        self
    }

    fn cells_mut(&mut self) -> [&mut String; 16] {
        [
            &mut self.fecha,
            &mut self.centro_seccion,
            &mut self.nreg,
            &mut self.nexp,
            &mut self.objeto,
            &mut self.tipo,
            &mut self.procedimiento,
            &mut self.numlicit,
            &mut self.numinvitcurs,
            &mut self.proc_adjud,
            &mut self.presupuesto_con_iva,
            &mut self.valor_estimado,
            &mut self.importe_adj_con_iva,
            &mut self.adjuducatario,
            &mut self.fecha_formalizacion,
            &mut self.i_g,
        ]
    }
}

/// Response body of `GET /retrieve_data/`.
#[derive(Clone, Debug, Default, Serialize, ToSchema)]
pub struct ContractListing {
    pub contratos: Vec<ContractRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_missing_only_touches_blank_cells() {
        let rec = ContractRecord { fecha: "2023-01-01".into(), objeto: "".into(), nreg: " ".into(), ..Default::default() }
            .fill_missing();
        assert_eq!(rec.fecha, "2023-01-01");
        assert_eq!(rec.objeto, "0");
        assert_eq!(rec.nreg, " ");
        assert_eq!(rec.i_g, "0");
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 16);
        assert_eq!(v["I_G"], "0");
    }

    #[test]
    fn na_markers_are_missing_but_lookalikes_are_not() {
        let rec = ContractRecord {
            fecha: "NaN".into(),
            nreg: "N/A".into(),
            nexp: "null".into(),
            objeto: "NA".into(),
            tipo: "Nada".into(),
            procedimiento: " NA".into(),
            ..Default::default()
        }
        .fill_missing();
        assert_eq!(rec.fecha, "0");
        assert_eq!(rec.nreg, "0");
        assert_eq!(rec.nexp, "0");
        assert_eq!(rec.objeto, "0");
        assert_eq!(rec.tipo, "Nada");
        assert_eq!(rec.procedimiento, " NA");
    }
}
