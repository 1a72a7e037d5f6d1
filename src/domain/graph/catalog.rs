//! Authored content of the role-classification flow for Ley 21.719.
//!
//! Edge table (answer -> successor):
//!
//! | Node | si          | no              | nosé                  |
//! |------|-------------|-----------------|-----------------------|
//! | q1_1 | q1_2        | fin_anonimo     |                       |
//! | q1_2 | q2_1        | fin_territorial |                       |
//! | q2_1 | q3_1        | q4_1            | stay, show factors    |
//! | q3_1 | resultado_b | q3_2            |                       |
//! | q3_2 | resultado_b | q3_3            |                       |
//! | q3_3 | resultado_b | resultado_a     |                       |
//! | q4_1 | resultado_c | resultado_e     |                       |
//!
//! `resultado_d` is authored but has no inbound edge.

use crate::domain::foundation::{Answer, AuxFlag, NodeId, Role, Severity};

use super::node::{Branch, Factor, Guidance, IntroNode, Node, QuestionNode, TerminalNode};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns every node of the standard flow in authoring order.
pub fn standard_nodes() -> Vec<Node> {
    vec![
        intro(),
        personal_data(),
        territorial_scope(),
        purpose_and_means(),
        provider_design(),
        provider_benefits(),
        enriched_data_return(),
        technical_service(),
        anonymous_data(),
        outside_territory(),
        sole_controller(),
        joint_controller(),
        processor(),
        hybrid_role(),
        undetermined(),
    ]
}

fn intro() -> Node {
    Node::Intro(IntroNode {
        id: NodeId::Start,
        title: "Flujo Interactivo para Investigadores: Determinación de Rol Bajo la Ley 21.719".into(),
        paragraphs: lines(&[
            "Contexto Específico: Este flujo está diseñado para investigadores y organizaciones de \
             investigación que utilizan datos personales en proyectos científicos. Reconoce que los \
             datos pueden tener un ciclo de vida con diferentes etapas y responsables.",
            "Aviso Legal Importante: Esta es una herramienta de orientación avanzada y no reemplaza la \
             asesoría legal de un abogado experto en protección de datos y derecho de la investigación. \
             Las conclusiones son orientativas y deben ser validadas.",
            "Este análisis se basa en un enfoque por fases, reconociendo que un hospital puede ser \
             responsable de la recolección inicial de datos para atención de pacientes, pero su rol \
             puede ser diferente cuando esos mismos datos se utilizan en un proyecto de investigación \
             posterior.",
            "Enfoque: Este cuestionario se centra en definir su rol para el proyecto de investigación \
             específico que usted está llevando a cabo.",
        ]),
        begin_label: "Comenzar evaluación del proyecto de investigación".into(),
        next: NodeId::PersonalData,
    })
}

fn personal_data() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::PersonalData,
        heading: "PASO 1: APLICABILIDAD - Pregunta 1.1".into(),
        prompt: "¿Los datos que utilizará en su proyecto de investigación son \"datos personales\"?".into(),
        points_heading: None,
        points: Vec::new(),
        help: Some(
            "Un 'dato personal' es cualquier información sobre una persona natural identificada o \
             identificable. Esto incluye datos seudonimizados (donde los identificadores directos se \
             reemplazan por un código), que son comunes en investigación y siguen siendo considerados \
             datos personales. Los datos completa e irreversiblemente anonimizados no son datos \
             personales."
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - Utilizamos datos personales (incluye datos seudonimizados)",
                NodeId::TerritorialScope,
            ),
            Branch::go_to(
                Answer::No,
                "NO - Los datos son totalmente anónimos",
                NodeId::AnonymousData,
            ),
        ],
        back_target: None,
        guidance: None,
    })
}

fn territorial_scope() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::TerritorialScope,
        heading: "PASO 1: APLICABILIDAD - Pregunta 1.2".into(),
        prompt: "¿Su proyecto de investigación cumple al menos una de las condiciones de aplicación \
                 territorial de la Ley 21.719?"
            .into(),
        points_heading: None,
        points: lines(&[
            "Su institución de investigación está establecida en Chile",
            "El proveedor de datos está establecido en Chile",
            "Su investigación monitorea el comportamiento de personas que están en Chile",
        ]),
        help: Some(
            "¿Su institución está en Chile? ¿El proveedor de datos está en Chile? ¿Su investigación \
             monitorea a personas en Chile?"
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - Cumple al menos una condición territorial",
                NodeId::PurposeAndMeans,
            ),
            Branch::go_to(
                Answer::No,
                "NO - No cumple ninguna condición territorial",
                NodeId::OutsideTerritory,
            ),
        ],
        back_target: Some(NodeId::PersonalData),
        guidance: None,
    })
}

fn purpose_and_means() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::PurposeAndMeans,
        heading: "PASO 2: EL MOTOR DE LA INVESTIGACIÓN - Pregunta 2.1".into(),
        prompt: "Para este proyecto de investigación específico, ¿es su organización (como \"usuario \
                 de datos\") la que define el propósito de la investigación (la pregunta o hipótesis \
                 científica) Y los medios esenciales para responderla?"
            .into(),
        points_heading: Some("Los medios esenciales incluyen decidir sobre:".into()),
        points: lines(&[
            "Qué variables o tipos de datos específicos se necesitan",
            "Los criterios de inclusión/exclusión de los sujetos",
            "Los métodos de análisis estadístico o bioinformático",
            "El período de tiempo que necesitará los datos",
            "Qué colaboradores tendrán acceso a los datos",
        ]),
        help: Some(
            "La prueba para ser Responsable es determinar el 'porqué' y el 'cómo' del tratamiento. En \
             investigación significa: definir la pregunta de investigación Y tomar decisiones clave \
             sobre metodología (qué variables, criterios de inclusión/exclusión, métodos de análisis, \
             período de tiempo, qué colaboradores tendrán acceso)."
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - Definimos tanto el propósito como los medios esenciales",
                NodeId::ProviderDesign,
            ),
            Branch::go_to(
                Answer::No,
                "NO - No definimos ambos aspectos",
                NodeId::TechnicalService,
            ),
            Branch::stay(
                Answer::Unsure,
                "NO SÉ - No estoy seguro sobre quién decide",
                AuxFlag::ShowFactors,
            ),
        ],
        back_target: Some(NodeId::TerritorialScope),
        guidance: Some(Guidance {
            flag: AuxFlag::ShowFactors,
            heading: "Factores para ayudar a decidir:".into(),
            factors: vec![
                Factor {
                    name: "Iniciativa y Diseño".into(),
                    question: "¿Quién redactó el protocolo de investigación? ¿Quién diseñó la \
                               metodología?"
                        .into(),
                },
                Factor {
                    name: "Independencia Científica".into(),
                    question: "¿Su organización tiene libertad académica para llevar a cabo la \
                               investigación?"
                        .into(),
                },
                Factor {
                    name: "Resultados y Publicación".into(),
                    question: "¿Su organización generará los resultados y los publicará?".into(),
                },
                Factor {
                    name: "Rendición de Cuentas".into(),
                    question: "¿Ante quién responde por el éxito o fracaso científico del proyecto?"
                        .into(),
                },
            ],
            closing: "Después de reflexionar, vuelva a responder la pregunta principal.".into(),
        }),
    })
}

fn provider_design() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::ProviderDesign,
        heading: "PASO 3: ANÁLISIS DEL PROVEEDOR DE DATOS - Pregunta 3.1".into(),
        prompt: "Más allá de entregar los datos y exigirle cumplir con la ley, ¿el proveedor de datos \
                 (ej. hospital, biobanco) participa activamente en el diseño y la metodología de su \
                 protocolo de investigación?"
            .into(),
        points_heading: None,
        points: Vec::new(),
        help: Some(
            "No se refiere a que el proveedor verifique que su proyecto sea ético o científicamente \
             sólido (eso es parte de su propia diligencia). Se refiere a que el proveedor colabore en \
             definir las preguntas, variables o métodos de su proyecto."
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - El proveedor colabora en el diseño del proyecto",
                NodeId::JointController,
            ),
            Branch::go_to(
                Answer::No,
                "NO - Solo nos entrega los datos",
                NodeId::ProviderBenefits,
            ),
        ],
        back_target: Some(NodeId::PurposeAndMeans),
        guidance: None,
    })
}

fn provider_benefits() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::ProviderBenefits,
        heading: "PASO 3: ANÁLISIS DEL PROVEEDOR DE DATOS - Pregunta 3.2".into(),
        prompt: "Como condición para darle acceso a los datos, ¿el proveedor le exige una \
                 participación en los beneficios económicos o derechos de propiedad intelectual (PI) \
                 que se generen a partir de los resultados de su investigación?"
            .into(),
        points_heading: None,
        points: Vec::new(),
        help: Some(
            "Esto es un indicador potente de que el proveedor tiene un propósito propio, \
             inextricablemente ligado al suyo. No confundir con el mero pago de una tarifa de acceso \
             a los datos, ni con la simple exigencia de ser 'reconocido' en las publicaciones."
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - Exige participación en beneficios económicos o PI",
                NodeId::JointController,
            ),
            Branch::go_to(
                Answer::No,
                "NO - Solo pago de tarifa de acceso o reconocimiento",
                NodeId::EnrichedDataReturn,
            ),
        ],
        back_target: Some(NodeId::ProviderDesign),
        guidance: None,
    })
}

fn enriched_data_return() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::EnrichedDataReturn,
        heading: "PASO 3: ANÁLISIS DEL PROVEEDOR DE DATOS - Pregunta 3.3".into(),
        prompt: "Como condición de acceso, ¿el proveedor le exige que le devuelva los datos \
                 enriquecidos (ej. datos clínicos estructurados, secuencias genómicas anotadas) para \
                 que él pueda explotarlos en sus propios proyectos futuros o con otros fines \
                 comerciales o científicos propios?"
            .into(),
        points_heading: None,
        points: Vec::new(),
        help: Some(
            "Este requerimiento puede indicar un propósito propio del proveedor para enriquecer sus \
             activos de datos, lo que lo vincularía a su proyecto."
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - Exige devolución de datos enriquecidos",
                NodeId::JointController,
            ),
            Branch::go_to(
                Answer::No,
                "NO - No exige devolución de datos enriquecidos",
                NodeId::SoleController,
            ),
        ],
        back_target: Some(NodeId::ProviderBenefits),
        guidance: None,
    })
}

fn technical_service() -> Node {
    Node::Question(QuestionNode {
        id: NodeId::TechnicalService,
        heading: "PASO 4: ANÁLISIS DEL ROL DE ENCARGADO - Pregunta 4.1".into(),
        prompt: "¿Su rol se limita a prestar un servicio técnico o analítico a otra organización de \
                 investigación (el Responsable), siguiendo estrictamente sus instrucciones?"
            .into(),
        points_heading: None,
        points: Vec::new(),
        help: Some(
            "Ejemplos: Un investigador le entrega datos y le pide ejecutar un análisis bioinformático \
             específico, sin que usted decida sobre la pregunta de investigación. O usted provee un \
             entorno de procesamiento seguro donde el investigador principal accede y analiza los \
             datos."
                .into(),
        ),
        branches: vec![
            Branch::go_to(
                Answer::Yes,
                "SÍ - Prestamos servicio técnico siguiendo instrucciones",
                NodeId::Processor,
            ),
            Branch::go_to(
                Answer::No,
                "NO - Nuestro rol no se limita a seguir instrucciones",
                NodeId::Undetermined,
            ),
        ],
        back_target: Some(NodeId::PurposeAndMeans),
        guidance: None,
    })
}

fn anonymous_data() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::AnonymousData,
        title: "FIN DEL FLUJO - Datos Anónimos".into(),
        severity: Severity::Info,
        role: None,
        profile: None,
        body: Some(
            "Si trabaja exclusivamente con datos anonimizados, las principales obligaciones de la Ley \
             21.719 no aplican a su proyecto. Puede proceder con su investigación, asegurándose de que \
             la anonimización sea robusta y permanente."
                .into(),
        ),
        next_steps: Vec::new(),
    })
}

fn outside_territory() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::OutsideTerritory,
        title: "FIN DEL FLUJO - Fuera del Ámbito Territorial".into(),
        severity: Severity::Info,
        role: None,
        profile: None,
        body: Some(
            "Es posible que la ley chilena no le aplique por razones territoriales, pero podría estar \
             sujeto a otras legislaciones (ej. RGPD en Europa). Consulte a un experto en derecho \
             internacional de datos."
                .into(),
        ),
        next_steps: Vec::new(),
    })
}

fn sole_controller() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::SoleController,
        title: "RESPONSABLE ÚNICO DEL PROYECTO DE INVESTIGACIÓN".into(),
        severity: Severity::Success,
        role: Some(Role::SoleController),
        profile: Some(
            "Usted (o su institución) es el 'usuario de datos' y el único responsable del tratamiento \
             para los fines de su proyecto de investigación. La entidad que le proveyó los datos es un \
             'proveedor de datos' que actúa como un responsable separado en una fase previa y no es \
             responsable de su proyecto."
                .into(),
        ),
        body: None,
        next_steps: lines(&[
            "Cumplir con todas las obligaciones de un responsable bajo la Ley 21.719, especialmente el \
             Principio de Finalidad (Art. 3(b))",
            "Asegurar el cumplimiento del Principio de Responsabilidad (Art. 3(e)), siendo capaz de \
             demostrar el cumplimiento",
            "Si el tratamiento se basa en el interés legítimo (Art. 16 quinquies), adoptar medidas de \
             calidad y seguridad adecuadas",
            "Firmar un 'Acuerdo de Transferencia de Datos' o 'Acuerdo de Uso de Datos' con el proveedor",
        ]),
    })
}

fn joint_controller() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::JointController,
        title: "CORRESPONSABLE DEL PROYECTO DE INVESTIGACIÓN".into(),
        severity: Severity::Success,
        role: Some(Role::JointController),
        profile: Some(
            "Usted y el 'proveedor de datos' son corresponsables (controladores conjuntos) porque \
             ambos participan de forma decisiva en el diseño del proyecto o en sus resultados (PI, \
             datos enriquecidos)."
                .into(),
        ),
        body: None,
        next_steps: lines(&[
            "Obligatorio: Establecer un acuerdo de corresponsabilidad claro y por escrito",
            "El acuerdo debe definir quién es responsable de qué (quién informa al titular, quién \
             responde a solicitudes, etc.)",
            "El acuerdo debe ser transparente para los titulares de los datos",
            "Ambas partes son solidariamente responsables por los daños, por lo que la coordinación es \
             crucial",
        ]),
    })
}

fn processor() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::Processor,
        title: "ENCARGADO (PROCESADOR) DEL TRATAMIENTO PARA LA INVESTIGACIÓN".into(),
        severity: Severity::Success,
        role: Some(Role::Processor),
        profile: Some(
            "Usted presta un servicio a un Responsable (el investigador principal o su institución). \
             No tiene poder de decisión sobre los fines y medios esenciales del proyecto."
                .into(),
        ),
        body: None,
        next_steps: lines(&[
            "Su relación debe estar regida por un contrato de mandato (Acuerdo de Tratamiento de \
             Datos) que cumpla con el Artículo 15 bis",
            "El contrato debe especificar que sólo puede actuar bajo instrucciones documentadas",
            "Debe implementar las medidas de seguridad requeridas y mantener la confidencialidad",
            "No puede usar los datos para fines propios sin autorización expresa",
        ]),
    })
}

fn hybrid_role() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::HybridRole,
        title: "ROL HÍBRIDO Y POTENCIAL INFRACCIÓN".into(),
        severity: Severity::Warning,
        role: Some(Role::Hybrid),
        profile: Some(
            "Actúa como Encargado para una tarea específica, pero luego usa los datos para un proyecto \
             de investigación propio. En ese momento, se convierte en Responsable de ese nuevo \
             tratamiento."
                .into(),
        ),
        body: None,
        next_steps: lines(&[
            "Debe obtener una base de licitud válida para su propio proyecto de investigación",
            "Usar datos recibidos como Encargado para un fin propio no autorizado es una infracción \
             grave",
            "Puede anular la licitud de su proyecto desde el inicio - se requiere máxima precaución",
            "Buscar asesoría legal inmediata antes de proceder",
        ]),
    })
}

fn undetermined() -> Node {
    Node::Terminal(TerminalNode {
        id: NodeId::Undetermined,
        title: "ROL INDETERMINADO - ALTO RIESGO".into(),
        severity: Severity::Error,
        role: Some(Role::Undetermined),
        profile: Some(
            "Sus respuestas no permiten una clasificación clara. Esta ambigüedad es un riesgo legal y \
             operativo muy alto en el contexto de la investigación científica."
                .into(),
        ),
        body: None,
        next_steps: lines(&[
            "Acción Urgente: Buscar asesoría legal especializada para definir y documentar su rol",
            "NO iniciar el tratamiento de datos hasta que su rol esté claramente definido",
            "La falta de claridad puede invalidar la base legal de todo su proyecto de investigación",
            "Documentar todas las relaciones y acuerdos con las partes involucradas",
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_authors_every_node_id_once() {
        let nodes = standard_nodes();
        let ids: HashSet<NodeId> = nodes.iter().map(Node::id).collect();
        assert_eq!(nodes.len(), NodeId::ALL.len());
        assert_eq!(ids.len(), NodeId::ALL.len());
    }

    #[test]
    fn only_purpose_question_offers_unsure() {
        for node in standard_nodes() {
            if let Some(q) = node.as_question() {
                let offers_unsure = q.permits(Answer::Unsure);
                assert_eq!(
                    offers_unsure,
                    q.id == NodeId::PurposeAndMeans,
                    "unexpected nosé on {}",
                    q.id
                );
            }
        }
    }

    #[test]
    fn every_question_offers_yes_and_no() {
        for node in standard_nodes() {
            if let Some(q) = node.as_question() {
                assert!(q.permits(Answer::Yes), "{} lacks si", q.id);
                assert!(q.permits(Answer::No), "{} lacks no", q.id);
            }
        }
    }

    #[test]
    fn role_outcomes_carry_next_steps_and_profile() {
        for node in standard_nodes() {
            if let Some(t) = node.as_terminal() {
                if t.role.is_some() {
                    assert_eq!(t.next_steps.len(), 4, "{}", t.id);
                    assert!(t.profile.is_some(), "{}", t.id);
                } else {
                    assert!(t.body.is_some(), "{}", t.id);
                    assert!(t.next_steps.is_empty(), "{}", t.id);
                }
            }
        }
    }

    #[test]
    fn guidance_is_tied_to_the_unsure_flag() {
        let q2 = purpose_and_means();
        let q = q2.as_question().unwrap();
        let guidance = q.guidance.as_ref().unwrap();
        assert_eq!(guidance.flag, AuxFlag::ShowFactors);
        assert_eq!(guidance.factors.len(), 4);
    }
}
