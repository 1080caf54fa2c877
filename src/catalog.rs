//! Closed category catalogs — law areas and legal terms.
//!
//! Both catalogs are fixed at compile time. Selections cross the webview
//! boundary as their human-readable labels; deserializing a label that is
//! not in the catalog is an error, so an out-of-catalog selection is
//! unrepresentable on the Rust side.

use serde::{Deserialize, Serialize};

/// Defines a catalog enum plus its display-ordered member list,
/// label lookup in both directions, `Display`, and label-keyed serde.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every catalog member, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The label shown in the selector for this member.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Look up a catalog member by its exact label.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Self::from_label(&label).ok_or_else(|| {
                    serde::de::Error::unknown_variant(&label, &[$($label,)+])
                })
            }
        }
    };
}

catalog! {
    /// Coarse-grained area of law the user's problem falls under.
    LawArea {
        AdministrativeLaw => "Administrative Law",
        BankingAndFinanceLaw => "Banking and Finance Law",
        CivilLaw => "Civil Law",
        CommercialLaw => "Commercial Law",
        ConstitutionalLaw => "Constitutional Law",
        ConsumerProtectionLaw => "Consumer Protection Law",
        ContractLaw => "Contract Law",
        CriminalLaw => "Criminal Law",
        EmploymentLaw => "Employment Law",
        EnvironmentalLaw => "Environmental Law",
        FamilyLaw => "Family Law",
        ImmigrationLaw => "Immigration Law",
        IntellectualPropertyLaw => "Intellectual Property Law",
        InternationalLaw => "International Law",
        LaborLaw => "Labor Law",
        PropertyLaw => "Property Law",
        TaxLaw => "Tax Law",
        TortLaw => "Tort Law",
        TrustsAndEstatesLaw => "Trusts and Estates Law",
    }
}

impl Default for LawArea {
    fn default() -> Self {
        Self::EmploymentLaw
    }
}

catalog! {
    /// Fine-grained legal term for the term-explainer flow.
    LegalTerm {
        ActusReus => "Actus Reus",
        Adjudication => "Adjudication",
        AdministrativeAgency => "Administrative Agency",
        AdministrativeAppeal => "Administrative Appeal",
        Adoption => "Adoption",
        AdversePossession => "Adverse Possession",
        Annulment => "Annulment",
        Arbitration => "Arbitration",
        Arson => "Arson",
        Asylum => "Asylum",
        BankingRegulation => "Banking Regulation",
        Bankruptcy => "Bankruptcy",
        Benefits => "Benefits",
        BilateralContract => "Bilateral Contract",
        BiodiversityConservation => "Biodiversity Conservation",
        BreachOfContract => "Breach of Contract",
        ChildCustody => "Child Custody",
        ChildSupport => "Child Support",
        Citizenship => "Citizenship",
        ClimateChange => "Climate Change",
        Collateral => "Collateral",
        CollectiveBargaining => "Collective Bargaining",
        Consideration => "Consideration",
        ConstitutionalAmendment => "Constitutional Amendment",
        ConstitutionalInterpretation => "Constitutional Interpretation",
        ConstructiveDismissal => "Constructive Dismissal",
        ConsumerClassAction => "Consumer Class Action",
        ConsumerCredit => "Consumer Credit",
        ConsumerFraud => "Consumer Fraud",
        ConsumerPrivacy => "Consumer Privacy",
        ConsumerProtectionAgency => "Consumer Protection Agency",
        ConsumerWarranty => "Consumer Warranty",
        Copyright => "Copyright",
        CreditLine => "Credit Line",
        Cybercrime => "Cybercrime",
        Damages => "Damages",
        DeceptiveAdvertising => "Deceptive Advertising",
        Defamation => "Defamation",
        Deportation => "Deportation",
        DomesticViolence => "Domestic Violence",
        DrugTrafficking => "Drug Trafficking",
        DueProcess => "Due Process",
        Easement => "Easement",
        EmploymentContract => "Employment Contract",
        EndangeredSpecies => "Endangered Species",
        EnvironmentalRegulation => "Environmental Regulation",
        EqualProtection => "Equal Protection",
        Estafa => "Estafa",
        Filiation => "Filiation",
        FreeSpeech => "Free Speech",
        Homicide => "Homicide",
        IllegalDismissal => "Illegal Dismissal",
        ImmigrationAppeals => "Immigration Appeals",
        ImmigrationCourt => "Immigration Court",
        ImmigrationPolicy => "Immigration Policy",
        ImpliedContract => "Implied Contract",
        Injunction => "Injunction",
        IntellectualPropertyInfringement => "Intellectual Property Infringement",
        IntellectualPropertyLitigation => "Intellectual Property Litigation",
        IntentionalTorts => "Intentional Torts",
        JudicialReview => "Judicial Review",
        Kidnapping => "Kidnapping",
        LaborArbitration => "Labor Arbitration",
        LaborStandards => "Labor Standards",
        Lease => "Lease",
        LegalSeparation => "Legal Separation",
        Liability => "Liability",
        Licensing => "Licensing",
        Marriage => "Marriage",
        Mediation => "Mediation",
        MensRea => "Mens Rea",
        Mortgage => "Mortgage",
        Murder => "Murder",
        NaturalResourceManagement => "Natural Resource Management",
        Naturalization => "Naturalization",
        Negligence => "Negligence",
        NegotiableInstrument => "Negotiable Instrument",
        Nuisance => "Nuisance",
        OfferAndAcceptance => "Offer and Acceptance",
        Ownership => "Ownership",
        Partition => "Partition",
        Patent => "Patent",
        PerformanceOfContract => "Performance of Contract",
        PersonalInjury => "Personal Injury",
        PersonalProperty => "Personal Property",
        Pollution => "Pollution",
        Possession => "Possession",
        ProductLiability => "Product Liability",
        PromissoryNote => "Promissory Note",
        PropertyRelations => "Property Relations",
        PsychologicalIncapacity => "Psychological Incapacity",
        QuasiJudicial => "Quasi-Judicial",
        QuietingOfTitle => "Quieting of Title",
        Rape => "Rape",
        RealProperty => "Real Property",
        RefugeeStatus => "Refugee Status",
        ReligiousFreedom => "Religious Freedom",
        Resignation => "Resignation",
        Robbery => "Robbery",
        RuleMaking => "Rule-Making",
        SecuritiesLaw => "Securities Law",
        SeparationOfPowers => "Separation of Powers",
        SpecificPerformance => "Specific Performance",
        StrictLiability => "Strict Liability",
        Termination => "Termination",
        Theft => "Theft",
        TortReform => "Tort Reform",
        TradeSecret => "Trade Secret",
        Trademark => "Trademark",
        Trespass => "Trespass",
        UnilateralContract => "Unilateral Contract",
        Visa => "Visa",
        Wages => "Wages",
        WasteManagement => "Waste Management",
    }
}

impl Default for LegalTerm {
    // The term page resets to the top of the catalog on mount.
    fn default() -> Self {
        Self::ActusReus
    }
}
