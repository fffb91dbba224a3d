use serde::Serialize;
use utoipa::ToSchema;

/// Revenue per owner as two parallel sequences, in first-seen order.
#[derive(Clone, Debug, Default, Serialize, PartialEq, ToSchema)]
pub struct OwnerRevenue {
    #[serde(rename = "nombres")]
    pub names: Vec<String>,
    #[serde(rename = "valores")]
    pub totals: Vec<f64>,
}

impl OwnerRevenue {
    /// Adds `amount` to `owner`, appending the owner on first sight.
    pub fn add(&mut self, owner: &str, amount: f64) {
        match self.names.iter().position(|n| n == owner) {
            Some(idx) => self.totals[idx] += amount,
            None => {
                self.names.push(owner.to_string());
                self.totals.push(amount);
            }
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, ToSchema)]
pub struct Statistics {
    #[serde(rename = "total_dueños")]
    pub total_owners: usize,
    pub total_mascotas: usize,
    pub total_citas: usize,
    pub total_facturas: usize,
    pub total_ingresos: f64,
    #[serde(rename = "ingresos_por_dueño")]
    pub revenue_by_owner: OwnerRevenue,
}
