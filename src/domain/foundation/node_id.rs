//! NodeId enum naming every node of the role-classification flow.
//!
//! The wire form (`q1_1`, `fin_anonimo`, `resultado_b`, ...) is what the
//! renderer sends and receives; the variants name what each node asks or
//! concludes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FlowError;

/// Stable identifier of a node in the decision graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeId {
    /// Intro screen, the entry of the flow.
    #[serde(rename = "inicio")]
    Start,
    /// 1.1 Are the data personal data?
    #[serde(rename = "q1_1")]
    PersonalData,
    /// 1.2 Does the project meet a territorial condition?
    #[serde(rename = "q1_2")]
    TerritorialScope,
    /// 2.1 Does the organization define purpose and essential means?
    #[serde(rename = "q2_1")]
    PurposeAndMeans,
    /// 3.1 Does the data provider take part in the design?
    #[serde(rename = "q3_1")]
    ProviderDesign,
    /// 3.2 Does the provider demand a share of benefits or IP?
    #[serde(rename = "q3_2")]
    ProviderBenefits,
    /// 3.3 Does the provider demand the enriched data back?
    #[serde(rename = "q3_3")]
    EnrichedDataReturn,
    /// 4.1 Is the role limited to a technical service on instructions?
    #[serde(rename = "q4_1")]
    TechnicalService,
    #[serde(rename = "fin_anonimo")]
    AnonymousData,
    #[serde(rename = "fin_territorial")]
    OutsideTerritory,
    #[serde(rename = "resultado_a")]
    SoleController,
    #[serde(rename = "resultado_b")]
    JointController,
    #[serde(rename = "resultado_c")]
    Processor,
    #[serde(rename = "resultado_d")]
    HybridRole,
    #[serde(rename = "resultado_e")]
    Undetermined,
}

impl NodeId {
    /// Every node id, in authoring order.
    pub const ALL: [NodeId; 15] = [
        NodeId::Start,
        NodeId::PersonalData,
        NodeId::TerritorialScope,
        NodeId::PurposeAndMeans,
        NodeId::ProviderDesign,
        NodeId::ProviderBenefits,
        NodeId::EnrichedDataReturn,
        NodeId::TechnicalService,
        NodeId::AnonymousData,
        NodeId::OutsideTerritory,
        NodeId::SoleController,
        NodeId::JointController,
        NodeId::Processor,
        NodeId::HybridRole,
        NodeId::Undetermined,
    ];

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::Start => "inicio",
            NodeId::PersonalData => "q1_1",
            NodeId::TerritorialScope => "q1_2",
            NodeId::PurposeAndMeans => "q2_1",
            NodeId::ProviderDesign => "q3_1",
            NodeId::ProviderBenefits => "q3_2",
            NodeId::EnrichedDataReturn => "q3_3",
            NodeId::TechnicalService => "q4_1",
            NodeId::AnonymousData => "fin_anonimo",
            NodeId::OutsideTerritory => "fin_territorial",
            NodeId::SoleController => "resultado_a",
            NodeId::JointController => "resultado_b",
            NodeId::Processor => "resultado_c",
            NodeId::HybridRole => "resultado_d",
            NodeId::Undetermined => "resultado_e",
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeId {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FlowError::unknown_node(s))
    }
}
