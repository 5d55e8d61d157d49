//! Workflow step plan - the fixed steps and sub-steps every promo goes through

/// Status of an étape or sous-étape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    ToDo,
    Done,
}

impl StepStatus {
    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "À faire",
            Self::Done => "Terminé",
        }
    }
}

/// A sub-step of a workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubStepTemplate {
    pub name: &'static str,
    /// 1-based position within the parent step
    pub ordre: i32,
}

/// A workflow step and the team member responsible for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTemplate {
    pub name: &'static str,
    pub intervenant_id: i32,
    pub sub_steps: &'static [SubStepTemplate],
}

const fn sub(name: &'static str, ordre: i32) -> SubStepTemplate {
    SubStepTemplate { name, ordre }
}

/// Steps created for every promo, in workflow order
pub const STEP_PLAN: &[StepTemplate] = &[
    StepTemplate {
        name: "Reception MAD",
        intervenant_id: 5,
        sub_steps: &[sub("Reception", 1)],
    },
    StepTemplate {
        name: "Préparation du dossier",
        intervenant_id: 5,
        sub_steps: &[
            sub("Extraction du Full Game", 1),
            sub("Extraction des sous-ventes Game", 2),
            sub("Extraction Apoline", 3),
            sub("Extraction Focus", 4),
            sub("Extraction KPI engagement", 5),
            sub("Récupération listing E-collab", 6),
            sub("Extraction/Correction poids et dimensions", 7),
            sub("Génération du calcul", 8),
            sub("Macro accélération", 9),
            sub("Lancement du script Revue Engagement", 10),
        ],
    },
    StepTemplate {
        name: "Analyse OP",
        intervenant_id: 5,
        sub_steps: &[
            sub("Retour E-collab", 1),
            sub("Finalisation Analyse OP", 2),
            sub("Forçage des prévisions", 3),
            sub("Communication des Pré_TDC", 4),
        ],
    },
    StepTemplate {
        name: "Animation TDC",
        intervenant_id: 5,
        sub_steps: &[sub("Animation", 1)],
    },
    StepTemplate {
        name: "Correction Post TDC",
        intervenant_id: 5,
        sub_steps: &[sub("Correction", 1)],
    },
    StepTemplate {
        name: "CR Post TDC",
        intervenant_id: 5,
        sub_steps: &[
            sub("Rédaction du CR", 1),
            sub("Copie et conversion du fichier", 2),
            sub("Partage et envoi du mail", 3),
        ],
    },
    StepTemplate {
        name: "Engagement",
        intervenant_id: 2,
        sub_steps: &[
            sub("Controle engagement", 1),
            sub("Chargement Game", 2),
            sub("Controle post engagement", 3),
            sub("Generation réferentiel promo", 4),
        ],
    },
    StepTemplate {
        name: "Transfert réseau",
        intervenant_id: 2,
        sub_steps: &[sub("Envoi du mail", 1)],
    },
];

impl StepTemplate {
    /// Total number of sub-steps across a plan
    pub fn sub_step_count(plan: &[StepTemplate]) -> usize {
        plan.iter().map(|step| step.sub_steps.len()).sum()
    }
}
