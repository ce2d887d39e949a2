//! Catalog Seed Data
//!
//! Mock content loaded at startup. All of it lives in memory only and is
//! recreated on every process restart.

use chrono::Utc;

use super::types::{Article, Badge, Book, Course, Drug, TeamMember, Topic};

/// Default course catalog for demo
pub fn default_courses() -> Vec<Course> {
    vec![
        Course {
            id: "crs_cardio_essentials".to_string(),
            title: "Cardiology Essentials".to_string(),
            description: "From cardiac cycle physiology to reading your first ECG".to_string(),
            specialty: "cardiology".to_string(),
            lesson_count: 24,
            duration_hours: 18,
            difficulty: "beginner".to_string(),
            instructor: "Dr. Amara Okafor".to_string(),
            enrolled_count: 1843,
            created_at: Utc::now(),
        },
        Course {
            id: "crs_neuro_exam".to_string(),
            title: "The Neurological Examination".to_string(),
            description: "Systematic bedside neurology: cranial nerves, motor, sensory, reflexes".to_string(),
            specialty: "neurology".to_string(),
            lesson_count: 16,
            duration_hours: 12,
            difficulty: "intermediate".to_string(),
            instructor: "Dr. Henrik Lund".to_string(),
            enrolled_count: 976,
            created_at: Utc::now(),
        },
        Course {
            id: "crs_pharm_principles".to_string(),
            title: "Principles of Pharmacology".to_string(),
            description: "Pharmacokinetics, pharmacodynamics, and rational prescribing".to_string(),
            specialty: "pharmacology".to_string(),
            lesson_count: 30,
            duration_hours: 22,
            difficulty: "intermediate".to_string(),
            instructor: "Dr. Priya Raman".to_string(),
            enrolled_count: 2210,
            created_at: Utc::now(),
        },
        Course {
            id: "crs_em_airway".to_string(),
            title: "Emergency Airway Management".to_string(),
            description: "Rapid sequence intubation, difficult airway algorithms, surgical airways".to_string(),
            specialty: "emergency_medicine".to_string(),
            lesson_count: 12,
            duration_hours: 9,
            difficulty: "advanced".to_string(),
            instructor: "Dr. Miguel Santos".to_string(),
            enrolled_count: 654,
            created_at: Utc::now(),
        },
    ]
}

/// Default article catalog for demo
pub fn default_articles() -> Vec<Article> {
    vec![
        Article {
            id: "art_sepsis_bundles".to_string(),
            title: "Sepsis Bundles in 2026: What Changed".to_string(),
            author: "Dr. Amara Okafor".to_string(),
            specialty: "critical_care".to_string(),
            summary: "A practical walkthrough of the updated hour-1 bundle".to_string(),
            body: "Early recognition remains the single highest-yield intervention in sepsis care...".to_string(),
            read_minutes: 9,
            published: true,
            created_at: Utc::now(),
        },
        Article {
            id: "art_statin_myopathy".to_string(),
            title: "Statin-Associated Muscle Symptoms: Myth and Measurement".to_string(),
            author: "Dr. Priya Raman".to_string(),
            specialty: "pharmacology".to_string(),
            summary: "Separating true myopathy from the nocebo effect".to_string(),
            body: "Randomized n-of-1 trials suggest most reported statin intolerance is not pharmacological...".to_string(),
            read_minutes: 7,
            published: true,
            created_at: Utc::now(),
        },
        Article {
            id: "art_stroke_windows".to_string(),
            title: "Extended Thrombectomy Windows: Selecting the Right Patient".to_string(),
            author: "Dr. Henrik Lund".to_string(),
            specialty: "neurology".to_string(),
            summary: "Perfusion imaging and the late-window trials".to_string(),
            body: "DAWN and DEFUSE-3 reframed stroke treatment around tissue viability rather than the clock...".to_string(),
            read_minutes: 11,
            published: true,
            created_at: Utc::now(),
        },
    ]
}

/// Default book catalog for demo
pub fn default_books() -> Vec<Book> {
    vec![
        Book {
            id: "bk_clinical_reasoning".to_string(),
            title: "Clinical Reasoning at the Bedside".to_string(),
            author: "S. Whitfield".to_string(),
            specialty: "internal_medicine".to_string(),
            edition: "3rd".to_string(),
            year: 2024,
            page_count: 412,
            summary: "Diagnostic frameworks, illness scripts, and cognitive bias in practice".to_string(),
            created_at: Utc::now(),
        },
        Book {
            id: "bk_ecg_interpretation".to_string(),
            title: "ECG Interpretation: A Systematic Approach".to_string(),
            author: "A. Okafor, J. Meyer".to_string(),
            specialty: "cardiology".to_string(),
            edition: "2nd".to_string(),
            year: 2023,
            page_count: 288,
            summary: "Rate, rhythm, axis, intervals, morphology — the same five steps, every time".to_string(),
            created_at: Utc::now(),
        },
        Book {
            id: "bk_pharm_pocket".to_string(),
            title: "Pocket Pharmacology".to_string(),
            author: "P. Raman".to_string(),
            specialty: "pharmacology".to_string(),
            edition: "5th".to_string(),
            year: 2025,
            page_count: 196,
            summary: "High-yield drug classes with mechanism-first summaries".to_string(),
            created_at: Utc::now(),
        },
    ]
}

/// Default drug monographs for demo
pub fn default_drugs() -> Vec<Drug> {
    vec![
        Drug {
            id: "drg_metoprolol".to_string(),
            name: "Metoprolol".to_string(),
            drug_class: "Beta-1 selective blocker".to_string(),
            indications: vec![
                "Hypertension".to_string(),
                "Angina pectoris".to_string(),
                "Heart failure with reduced ejection fraction".to_string(),
            ],
            contraindications: vec![
                "Severe bradycardia".to_string(),
                "Second- or third-degree AV block".to_string(),
                "Cardiogenic shock".to_string(),
            ],
            common_dosage: "25-100 mg twice daily (tartrate)".to_string(),
            side_effects: vec![
                "Fatigue".to_string(),
                "Bradycardia".to_string(),
                "Hypotension".to_string(),
            ],
            created_at: Utc::now(),
        },
        Drug {
            id: "drg_amoxicillin".to_string(),
            name: "Amoxicillin".to_string(),
            drug_class: "Aminopenicillin".to_string(),
            indications: vec![
                "Community-acquired pneumonia".to_string(),
                "Acute otitis media".to_string(),
                "Streptococcal pharyngitis".to_string(),
            ],
            contraindications: vec!["Penicillin hypersensitivity".to_string()],
            common_dosage: "500 mg three times daily".to_string(),
            side_effects: vec![
                "Diarrhea".to_string(),
                "Rash".to_string(),
                "Nausea".to_string(),
            ],
            created_at: Utc::now(),
        },
        Drug {
            id: "drg_warfarin".to_string(),
            name: "Warfarin".to_string(),
            drug_class: "Vitamin K antagonist".to_string(),
            indications: vec![
                "Atrial fibrillation with mechanical valve".to_string(),
                "Venous thromboembolism".to_string(),
            ],
            contraindications: vec![
                "Pregnancy".to_string(),
                "Active major bleeding".to_string(),
            ],
            common_dosage: "2-10 mg daily, titrated to INR 2-3".to_string(),
            side_effects: vec![
                "Bleeding".to_string(),
                "Skin necrosis (rare)".to_string(),
            ],
            created_at: Utc::now(),
        },
    ]
}

/// Default badge catalog for demo
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "bdg_first_steps".to_string(),
            name: "First Steps".to_string(),
            description: "Complete your first topic".to_string(),
            icon: "footprints".to_string(),
            points_required: 10,
            created_at: Utc::now(),
        },
        Badge {
            id: "bdg_dedicated_learner".to_string(),
            name: "Dedicated Learner".to_string(),
            description: "Earn 100 points".to_string(),
            icon: "flame".to_string(),
            points_required: 100,
            created_at: Utc::now(),
        },
        Badge {
            id: "bdg_resident_ready".to_string(),
            name: "Resident Ready".to_string(),
            description: "Earn 500 points".to_string(),
            icon: "stethoscope".to_string(),
            points_required: 500,
            created_at: Utc::now(),
        },
        Badge {
            id: "bdg_attending_level".to_string(),
            name: "Attending Level".to_string(),
            description: "Earn 1000 points".to_string(),
            icon: "crown".to_string(),
            points_required: 1000,
            created_at: Utc::now(),
        },
    ]
}

/// Default team roster for demo
pub fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "tm_okafor".to_string(),
            name: "Dr. Amara Okafor".to_string(),
            role: "Editor-in-Chief".to_string(),
            specialty: "cardiology".to_string(),
            bio: "Interventional cardiologist and medical educator".to_string(),
            created_at: Utc::now(),
        },
        TeamMember {
            id: "tm_lund".to_string(),
            name: "Dr. Henrik Lund".to_string(),
            role: "Section Editor, Neurology".to_string(),
            specialty: "neurology".to_string(),
            bio: "Stroke neurologist with a focus on acute intervention".to_string(),
            created_at: Utc::now(),
        },
        TeamMember {
            id: "tm_raman".to_string(),
            name: "Dr. Priya Raman".to_string(),
            role: "Section Editor, Pharmacology".to_string(),
            specialty: "pharmacology".to_string(),
            bio: "Clinical pharmacologist and curriculum designer".to_string(),
            created_at: Utc::now(),
        },
    ]
}

/// Default completable topics for demo
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: "top_cardiac_cycle".to_string(),
            title: "The Cardiac Cycle".to_string(),
            specialty: "cardiology".to_string(),
            points: 25,
            created_at: Utc::now(),
        },
        Topic {
            id: "top_ecg_basics".to_string(),
            title: "ECG Basics".to_string(),
            specialty: "cardiology".to_string(),
            points: 50,
            created_at: Utc::now(),
        },
        Topic {
            id: "top_cranial_nerves".to_string(),
            title: "Cranial Nerves".to_string(),
            specialty: "neurology".to_string(),
            points: 40,
            created_at: Utc::now(),
        },
        Topic {
            id: "top_pharmacokinetics".to_string(),
            title: "Pharmacokinetics".to_string(),
            specialty: "pharmacology".to_string(),
            points: 50,
            created_at: Utc::now(),
        },
        Topic {
            id: "top_sepsis_recognition".to_string(),
            title: "Recognizing Sepsis".to_string(),
            specialty: "critical_care".to_string(),
            points: 35,
            created_at: Utc::now(),
        },
    ]
}
