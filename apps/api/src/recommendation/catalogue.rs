//! Pathway template catalogue.
//!
//! Read-only, process-wide data compiled into the binary. The order of
//! `TEMPLATES` is part of the selection contract: the selector maps a profile
//! fingerprint to an index, so reordering or inserting entries changes which
//! template every existing profile receives. Bump `CATALOGUE_VERSION` when
//! the contents change.

use crate::models::analysis::PathwayType;

pub const CATALOGUE_VERSION: u32 = 1;

#[derive(Debug)]
pub struct PhaseDef {
    pub phase: &'static str,
    pub duration: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug)]
pub struct CredentialDef {
    pub name: &'static str,
    pub timeline: &'static str,
    pub cost: &'static str,
}

/// One strategy within a template.
#[derive(Debug)]
pub struct PathwayOption {
    pub title: &'static str,
    pub description: &'static str,
    /// Base starting salary in whole US dollars.
    pub base_salary: i64,
    pub roadmap: &'static [PhaseDef],
    pub credentials: &'static [CredentialDef],
    pub why_this_path: &'static str,
}

/// An archetypal specialty cluster with one option per strategy type.
#[derive(Debug)]
pub struct PathwayTemplate {
    pub id: &'static str,
    /// Interpolated into the summary paragraph.
    pub skill_area: &'static str,
    pub fast_income: PathwayOption,
    pub balanced: PathwayOption,
    pub max_upside: PathwayOption,
}

impl PathwayTemplate {
    pub fn option(&self, pathway_type: PathwayType) -> &PathwayOption {
        match pathway_type {
            PathwayType::FastIncome => &self.fast_income,
            PathwayType::Balanced => &self.balanced,
            PathwayType::MaxUpside => &self.max_upside,
        }
    }
}

pub static TEMPLATES: [PathwayTemplate; 5] = [
    // ── Combat arms / security ──────────────────────────────────────────────
    PathwayTemplate {
        id: "combat-arms",
        skill_area: "leadership, security, and high-pressure decision-making",
        fast_income: PathwayOption {
            title: "Federal Law Enforcement or Protective Security",
            description: "Move directly into federal security, corrections, or protective services roles that recruit veterans and value tactical experience.",
            base_salary: 55000,
            roadmap: &[
                PhaseDef {
                    phase: "Transition Prep",
                    duration: "1-2 months",
                    steps: &[
                        "Translate your MOS duties into a federal-style resume",
                        "Register on USAJOBS and set alerts for veterans' preference roles",
                        "Request your DD-214 and VA disability rating letter",
                    ],
                },
                PhaseDef {
                    phase: "Application & Screening",
                    duration: "2-4 months",
                    steps: &[
                        "Apply to CBP, Federal Protective Service, and Bureau of Prisons openings",
                        "Complete physical fitness and background investigation",
                    ],
                },
                PhaseDef {
                    phase: "Academy & Onboarding",
                    duration: "3-6 months",
                    steps: &[
                        "Attend the agency training academy",
                        "Complete field training with a senior officer",
                    ],
                },
            ],
            credentials: &[
                CredentialDef {
                    name: "Active Security Clearance (maintain)",
                    timeline: "Ongoing",
                    cost: "$0",
                },
                CredentialDef {
                    name: "State Armed Guard License",
                    timeline: "2-4 weeks",
                    cost: "$150-$400",
                },
            ],
            why_this_path: "Your tactical background and clearance are immediately valued, and veterans' preference shortens the hiring timeline.",
        },
        balanced: PathwayOption {
            title: "Operations Supervisor",
            description: "Lead teams in manufacturing, distribution, or field operations where military leadership translates directly to shift management.",
            base_salary: 60000,
            roadmap: &[
                PhaseDef {
                    phase: "Skill Translation",
                    duration: "1-3 months",
                    steps: &[
                        "Map squad and platoon leadership to civilian supervisory outcomes",
                        "Complete a Lean Six Sigma Yellow Belt course",
                    ],
                },
                PhaseDef {
                    phase: "Entry Leadership Role",
                    duration: "3-12 months",
                    steps: &[
                        "Join a veteran hiring program at a large employer",
                        "Supervise a shift team and own safety and throughput metrics",
                    ],
                },
                PhaseDef {
                    phase: "Advancement",
                    duration: "1-3 years",
                    steps: &[
                        "Earn a Green Belt and lead an improvement project",
                        "Move into an operations manager position",
                    ],
                },
            ],
            credentials: &[CredentialDef {
                name: "Lean Six Sigma Green Belt",
                timeline: "2-3 months",
                cost: "$300-$1,500",
            }],
            why_this_path: "It builds on proven people leadership while offering predictable hours and steady promotion ladders.",
        },
        max_upside: PathwayOption {
            title: "Defense Program Manager",
            description: "Join a defense contractor as an analyst or associate program manager and grow toward running multi-million dollar programs.",
            base_salary: 65000,
            roadmap: &[
                PhaseDef {
                    phase: "Foundation",
                    duration: "3-6 months",
                    steps: &[
                        "Study for the CAPM or PMP using your documented leadership hours",
                        "Network with veterans at major defense contractors",
                    ],
                },
                PhaseDef {
                    phase: "Program Analyst",
                    duration: "1-2 years",
                    steps: &[
                        "Support cost, schedule, and risk reporting on a program team",
                        "Learn earned value management",
                    ],
                },
                PhaseDef {
                    phase: "Program Leadership",
                    duration: "2-5 years",
                    steps: &[
                        "Own a program or major sub-program",
                        "Pursue an MBA or systems engineering graduate certificate",
                    ],
                },
            ],
            credentials: &[CredentialDef {
                name: "Project Management Professional (PMP)",
                timeline: "3-6 months",
                cost: "$405-$575 (often covered by GI Bill)",
            }],
            why_this_path: "Operational experience plus a clearance is rare in program management, which gives you leverage for rapid advancement.",
        },
    },
    // ── Technical / IT ──────────────────────────────────────────────────────
    PathwayTemplate {
        id: "technical-it",
        skill_area: "technical systems, networking, and troubleshooting",
        fast_income: PathwayOption {
            title: "Network or Systems Administrator",
            description: "Leverage your hands-on systems experience in a civilian IT operations role with a cleared employer.",
            base_salary: 65000,
            roadmap: &[
                PhaseDef {
                    phase: "Certification Sprint",
                    duration: "1-3 months",
                    steps: &[
                        "Earn CompTIA Security+ if not already held",
                        "Document the networks and systems you administered",
                    ],
                },
                PhaseDef {
                    phase: "Job Search",
                    duration: "1-3 months",
                    steps: &[
                        "Target cleared IT roles on ClearanceJobs",
                        "Use SkillBridge for a final-months internship if still serving",
                    ],
                },
                PhaseDef {
                    phase: "Ramp-Up",
                    duration: "6-12 months",
                    steps: &[
                        "Master the employer's tooling and ticketing workflow",
                        "Add a cloud associate certification",
                    ],
                },
            ],
            credentials: &[
                CredentialDef {
                    name: "CompTIA Security+",
                    timeline: "1-2 months",
                    cost: "$404",
                },
                CredentialDef {
                    name: "CompTIA Network+",
                    timeline: "1-2 months",
                    cost: "$369",
                },
            ],
            why_this_path: "DoD 8570 baseline certifications plus a clearance open cleared IT jobs that hire quickly and pay above market.",
        },
        balanced: PathwayOption {
            title: "Cloud Engineer",
            description: "Transition into cloud infrastructure roles that reward systems knowledge and offer hybrid or remote flexibility.",
            base_salary: 70000,
            roadmap: &[
                PhaseDef {
                    phase: "Cloud Foundations",
                    duration: "2-4 months",
                    steps: &[
                        "Complete AWS Solutions Architect Associate or Azure Administrator",
                        "Build a small portfolio project with infrastructure as code",
                    ],
                },
                PhaseDef {
                    phase: "Junior Cloud Role",
                    duration: "1-2 years",
                    steps: &[
                        "Join a cloud operations or DevOps team",
                        "Automate one recurring operational task per quarter",
                    ],
                },
                PhaseDef {
                    phase: "Specialization",
                    duration: "2-3 years",
                    steps: &["Pick a focus such as security, networking, or platform engineering"],
                },
            ],
            credentials: &[CredentialDef {
                name: "AWS Certified Solutions Architect - Associate",
                timeline: "2-3 months",
                cost: "$150",
            }],
            why_this_path: "Cloud roles balance strong pay growth with remote-friendly schedules that suit family life.",
        },
        max_upside: PathwayOption {
            title: "Cybersecurity Engineer",
            description: "Build toward senior security engineering or penetration testing, one of the fastest-growing and best-paid technical fields.",
            base_salary: 80000,
            roadmap: &[
                PhaseDef {
                    phase: "Security Foundations",
                    duration: "3-6 months",
                    steps: &[
                        "Earn Security+ and CySA+",
                        "Practice on hands-on labs and capture-the-flag platforms",
                    ],
                },
                PhaseDef {
                    phase: "SOC Analyst",
                    duration: "1-2 years",
                    steps: &[
                        "Work in a security operations center triaging alerts",
                        "Contribute detection rules and incident write-ups",
                    ],
                },
                PhaseDef {
                    phase: "Security Engineering",
                    duration: "2-5 years",
                    steps: &[
                        "Pursue CISSP once experience requirements are met",
                        "Lead threat modeling and security architecture reviews",
                    ],
                },
            ],
            credentials: &[
                CredentialDef {
                    name: "CompTIA CySA+",
                    timeline: "2-3 months",
                    cost: "$404",
                },
                CredentialDef {
                    name: "CISSP",
                    timeline: "6-12 months",
                    cost: "$749",
                },
            ],
            why_this_path: "Security talent is scarce and cleared security engineers command premium compensation at every level.",
        },
    },
    // ── Logistics / supply ──────────────────────────────────────────────────
    PathwayTemplate {
        id: "logistics",
        skill_area: "logistics, supply chain, and resource management",
        fast_income: PathwayOption {
            title: "Supply Chain Coordinator",
            description: "Step into coordinator roles at distribution centers and carriers that actively recruit military logisticians.",
            base_salary: 52000,
            roadmap: &[
                PhaseDef {
                    phase: "Resume Translation",
                    duration: "1 month",
                    steps: &[
                        "Quantify inventory values and shipment volumes you managed",
                        "Learn common ERP terms such as SAP and Oracle SCM",
                    ],
                },
                PhaseDef {
                    phase: "Hiring Pipeline",
                    duration: "1-3 months",
                    steps: &["Apply through veteran programs at major retailers and 3PLs"],
                },
                PhaseDef {
                    phase: "First Year",
                    duration: "6-12 months",
                    steps: &[
                        "Own a vendor or lane portfolio",
                        "Start the APICS CSCP coursework",
                    ],
                },
            ],
            credentials: &[CredentialDef {
                name: "Certified Logistics Associate (CLA)",
                timeline: "1 month",
                cost: "$150",
            }],
            why_this_path: "Military logistics maps almost one-to-one to civilian supply chain work, so ramp-up time is short.",
        },
        balanced: PathwayOption {
            title: "Logistics Analyst",
            description: "Combine operational experience with data skills to optimize routes, inventory, and cost.",
            base_salary: 58000,
            roadmap: &[
                PhaseDef {
                    phase: "Analytics Skills",
                    duration: "2-4 months",
                    steps: &[
                        "Learn advanced Excel and introductory SQL",
                        "Complete a supply chain analytics course",
                    ],
                },
                PhaseDef {
                    phase: "Analyst Role",
                    duration: "1-2 years",
                    steps: &[
                        "Build dashboards that track fill rate and on-time delivery",
                        "Present one cost-savings recommendation per quarter",
                    ],
                },
                PhaseDef {
                    phase: "Senior Analyst",
                    duration: "2-3 years",
                    steps: &["Lead network design or demand planning initiatives"],
                },
            ],
            credentials: &[CredentialDef {
                name: "APICS Certified Supply Chain Professional (CSCP)",
                timeline: "3-6 months",
                cost: "$1,395",
            }],
            why_this_path: "Analyst work offers regular hours and a clear growth path without heavy travel.",
        },
        max_upside: PathwayOption {
            title: "Operations Manager",
            description: "Run a distribution center or regional logistics network, owning budget, people, and performance.",
            base_salary: 65000,
            roadmap: &[
                PhaseDef {
                    phase: "Leadership Entry",
                    duration: "3-6 months",
                    steps: &["Join an area manager or leadership development program"],
                },
                PhaseDef {
                    phase: "Site Leadership",
                    duration: "1-3 years",
                    steps: &[
                        "Manage multiple shifts and a P&L line",
                        "Earn PMP or Six Sigma Black Belt",
                    ],
                },
                PhaseDef {
                    phase: "Regional Leadership",
                    duration: "3-5 years",
                    steps: &["Move into general manager or regional director roles"],
                },
            ],
            credentials: &[CredentialDef {
                name: "Lean Six Sigma Black Belt",
                timeline: "4-6 months",
                cost: "$2,000-$4,000",
            }],
            why_this_path: "Large-scale operations leadership rewards the accountability you carried in uniform with significant pay growth.",
        },
    },
    // ── Medical ─────────────────────────────────────────────────────────────
    PathwayTemplate {
        id: "medical",
        skill_area: "medical care, triage, and patient support",
        fast_income: PathwayOption {
            title: "Emergency Medical Technician or Paramedic",
            description: "Put your field medical training to work immediately in EMS, hospitals, or industrial medicine.",
            base_salary: 50000,
            roadmap: &[
                PhaseDef {
                    phase: "Civilian Certification",
                    duration: "1-2 months",
                    steps: &[
                        "Sit for the NREMT exam using military training credit",
                        "Apply for state EMS licensure",
                    ],
                },
                PhaseDef {
                    phase: "First Position",
                    duration: "1-3 months",
                    steps: &["Apply to hospital systems, fire departments, and private EMS"],
                },
                PhaseDef {
                    phase: "Upskilling",
                    duration: "6-12 months",
                    steps: &["Bridge to paramedic certification"],
                },
            ],
            credentials: &[CredentialDef {
                name: "NREMT Certification",
                timeline: "1-2 months",
                cost: "$98-$160",
            }],
            why_this_path: "Your hands-on clinical experience meets civilian requirements with minimal additional schooling.",
        },
        balanced: PathwayOption {
            title: "Registered Nurse",
            description: "Use accelerated military-to-RN bridge programs to move into nursing, a stable career with flexible scheduling.",
            base_salary: 60000,
            roadmap: &[
                PhaseDef {
                    phase: "Prerequisites",
                    duration: "3-6 months",
                    steps: &["Complete anatomy, physiology, and microbiology prerequisites"],
                },
                PhaseDef {
                    phase: "Bridge Program",
                    duration: "12-18 months",
                    steps: &[
                        "Enroll in a medic-to-RN or LPN-to-RN bridge program",
                        "Use GI Bill benefits to cover tuition and housing",
                    ],
                },
                PhaseDef {
                    phase: "Licensure",
                    duration: "2-3 months",
                    steps: &["Pass the NCLEX-RN", "Start in a residency program"],
                },
            ],
            credentials: &[CredentialDef {
                name: "NCLEX-RN License",
                timeline: "12-18 months",
                cost: "$200 exam fee (tuition GI Bill eligible)",
            }],
            why_this_path: "Nursing offers strong job security everywhere in the country and shift options that adapt to family needs.",
        },
        max_upside: PathwayOption {
            title: "Physician Assistant",
            description: "Pursue a PA degree, a profession that was created for military medics, for high earning potential and clinical autonomy.",
            base_salary: 70000,
            roadmap: &[
                PhaseDef {
                    phase: "Prerequisites & Patient Hours",
                    duration: "6-12 months",
                    steps: &[
                        "Finish science prerequisites",
                        "Document patient care hours from service",
                    ],
                },
                PhaseDef {
                    phase: "PA Program",
                    duration: "24-30 months",
                    steps: &["Complete an accredited PA master's program"],
                },
                PhaseDef {
                    phase: "Practice",
                    duration: "Ongoing",
                    steps: &["Pass the PANCE", "Choose a specialty with strong demand"],
                },
            ],
            credentials: &[CredentialDef {
                name: "PANCE Certification",
                timeline: "2-3 years",
                cost: "$550 exam fee (program GI Bill eligible)",
            }],
            why_this_path: "Military medical experience gives you a head start on admissions and the role has exceptional long-term earnings.",
        },
    },
    // ── Aviation / maintenance ──────────────────────────────────────────────
    PathwayTemplate {
        id: "aviation",
        skill_area: "aviation, mechanical systems, and precision maintenance",
        fast_income: PathwayOption {
            title: "Aircraft Maintenance Technician",
            description: "Convert your maintenance experience into an FAA Airframe & Powerplant certificate and join an airline or MRO shop.",
            base_salary: 60000,
            roadmap: &[
                PhaseDef {
                    phase: "FAA Eligibility",
                    duration: "1 month",
                    steps: &["Obtain a military experience eligibility letter from the FAA"],
                },
                PhaseDef {
                    phase: "A&P Testing",
                    duration: "2-4 months",
                    steps: &[
                        "Pass the written, oral, and practical A&P exams",
                        "Use the Joint Services Aviation Maintenance Technician Certification Council pathway",
                    ],
                },
                PhaseDef {
                    phase: "Employment",
                    duration: "1-3 months",
                    steps: &["Apply to airlines, cargo carriers, and MRO facilities"],
                },
            ],
            credentials: &[CredentialDef {
                name: "FAA Airframe & Powerplant (A&P) Certificate",
                timeline: "2-4 months",
                cost: "$1,500-$3,000",
            }],
            why_this_path: "There is a national shortage of certified mechanics and airlines offer signing bonuses to veterans.",
        },
        balanced: PathwayOption {
            title: "Aviation Operations Specialist",
            description: "Work in flight operations, dispatch, or air traffic roles that value your aviation background with regular schedules.",
            base_salary: 65000,
            roadmap: &[
                PhaseDef {
                    phase: "Certification",
                    duration: "2-3 months",
                    steps: &["Complete an FAA Aircraft Dispatcher course"],
                },
                PhaseDef {
                    phase: "Operations Role",
                    duration: "1-2 years",
                    steps: &[
                        "Join an airline operations control center",
                        "Cross-train on crew scheduling and maintenance control",
                    ],
                },
                PhaseDef {
                    phase: "Lead Role",
                    duration: "2-4 years",
                    steps: &["Move into operations supervisor or duty manager"],
                },
            ],
            credentials: &[CredentialDef {
                name: "FAA Aircraft Dispatcher Certificate",
                timeline: "2-3 months",
                cost: "$5,000-$7,000",
            }],
            why_this_path: "Operations roles keep you in aviation with more predictable shifts than line maintenance or flying.",
        },
        max_upside: PathwayOption {
            title: "Commercial Airline Pilot",
            description: "Build flight hours toward an airline transport pilot certificate for one of the highest-earning career ladders available.",
            base_salary: 75000,
            roadmap: &[
                PhaseDef {
                    phase: "Flight Training",
                    duration: "6-12 months",
                    steps: &[
                        "Earn private, instrument, and commercial ratings",
                        "Use GI Bill flight training benefits where eligible",
                    ],
                },
                PhaseDef {
                    phase: "Hour Building",
                    duration: "1-2 years",
                    steps: &["Work as a certified flight instructor to reach 1,500 hours"],
                },
                PhaseDef {
                    phase: "Airline Career",
                    duration: "Ongoing",
                    steps: &[
                        "Join a regional airline",
                        "Progress to a major airline captain seat",
                    ],
                },
            ],
            credentials: &[CredentialDef {
                name: "Airline Transport Pilot (ATP) Certificate",
                timeline: "18-36 months",
                cost: "$60,000-$90,000 (partially GI Bill eligible)",
            }],
            why_this_path: "Pilot demand is high and senior airline captains earn well into six figures.",
        },
    },
];
