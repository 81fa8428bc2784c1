use derive_more::Deref;

use crate::MuscleID;

/// Pre-authored guidance for one muscle or joint.
///
/// All sequences are in display order and never empty.
#[derive(Debug, PartialEq, Eq)]
pub struct AdviceRecord {
    pub muscle: MuscleID,
    pub name: &'static str,
    pub description: &'static str,
    pub common_injuries: &'static [&'static str],
    pub warm_up: &'static [&'static str],
    pub stretching: &'static [&'static str],
    pub recovery: &'static [&'static str],
    pub can_run_tomorrow: RunVerdict,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RunVerdict {
    pub answer: &'static str,
    pub confidence: Confidence,
}

#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: Confidence = Confidence(100);

    pub fn new(value: u8) -> Result<Self, ConfidenceError> {
        if value > 100 {
            return Err(ConfidenceError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfidenceError {
    #[error("Confidence must be 100 or less ({0} > 100)")]
    OutOfRange(u8),
}

/// Returns the advice for the selected muscle, or `None` if nothing is selected.
#[must_use]
pub fn lookup(muscle: Option<MuscleID>) -> Option<&'static AdviceRecord> {
    muscle.map(record)
}

pub(crate) fn record(muscle: MuscleID) -> &'static AdviceRecord {
    // The table is ordered like MuscleID.
    &ADVICE[muscle as usize]
}

static ADVICE: [AdviceRecord; 18] = [
    AdviceRecord {
        muscle: MuscleID::Quadriceps,
        name: "Quadriceps",
        description: "Large muscle group on the front of your thigh, essential for running power and knee extension.",
        common_injuries: &[
            "Quad strain",
            "Tendinitis",
            "Muscle tear",
        ],
        warm_up: &[
            "Light jogging for 5-10 minutes",
            "Leg swings front to back",
            "Walking lunges",
        ],
        stretching: &[
            "Standing quad stretch (hold 30 seconds each leg)",
            "Kneeling hip flexor stretch",
            "Foam roll quads for 2 minutes",
        ],
        recovery: &[
            "Ice for 15 minutes if swollen",
            "Gentle massage",
            "Avoid high-intensity running for 48 hours",
            "Consider cross-training (swimming, cycling)",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Light run possible if pain-free. Avoid speedwork.",
            confidence: Confidence(65),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Hamstrings,
        name: "Hamstrings",
        description: "Muscles on the back of your thigh, crucial for knee flexion and hip extension during running.",
        common_injuries: &[
            "Hamstring strain",
            "Pull or tear",
            "Tendinopathy",
        ],
        warm_up: &[
            "Dynamic leg swings",
            "High knees",
            "Butt kicks",
            "Gradual pace increase",
        ],
        stretching: &[
            "Seated hamstring stretch",
            "Standing forward bend",
            "Single-leg deadlift stretch",
        ],
        recovery: &[
            "RICE method (Rest, Ice, Compression, Elevation)",
            "Avoid sudden acceleration",
            "Strengthen with eccentric exercises after acute phase",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Rest recommended. Wait 48-72 hours for minor strains.",
            confidence: Confidence(40),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Glutes,
        name: "Glutes",
        description: "Your powerhouse muscles for running, providing hip extension and stability.",
        common_injuries: &[
            "Gluteal strain",
            "Piriformis syndrome",
            "Bursitis",
        ],
        warm_up: &[
            "Glute bridges",
            "Clamshells",
            "Lateral band walks",
            "Easy running with focus on activation",
        ],
        stretching: &[
            "Pigeon pose",
            "Figure-four stretch",
            "Seated spinal twist",
        ],
        recovery: &[
            "Foam rolling glutes and IT band",
            "Strengthen with single-leg exercises",
            "Address biomechanics if recurring",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Possible if no sharp pain. Monitor for compensation patterns.",
            confidence: Confidence(70),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Calves,
        name: "Calves",
        description: "Critical for push-off during running. Includes gastrocnemius and soleus muscles.",
        common_injuries: &[
            "Calf strain",
            "Achilles tendinitis",
            "Muscle tear",
        ],
        warm_up: &[
            "Ankle circles",
            "Calf raises on stairs",
            "Gradual running warm-up",
        ],
        stretching: &[
            "Wall calf stretch (straight and bent knee)",
            "Downward dog pose",
            "Eccentric calf drops",
        ],
        recovery: &[
            "Ice and elevation",
            "Avoid running on toes",
            "Gradual return with flat terrain",
            "Check shoe cushioning",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Rest 24-48 hours for minor strains. Risk of Achilles injury if rushed.",
            confidence: Confidence(35),
        },
    },
    AdviceRecord {
        muscle: MuscleID::HipFlexors,
        name: "Hip Flexors",
        description: "Muscles that lift your knee during running. Often tight in runners and desk workers.",
        common_injuries: &[
            "Hip flexor strain",
            "Tendinitis",
            "Iliopsoas syndrome",
        ],
        warm_up: &[
            "Leg swings",
            "Hip circles",
            "Walking lunges with rotation",
        ],
        stretching: &[
            "Kneeling hip flexor stretch",
            "Low lunge pose",
            "Lying hip flexor stretch",
        ],
        recovery: &[
            "Avoid excessive sitting",
            "Strengthen glutes to reduce compensation",
            "Massage and foam rolling",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Light jogging okay if no sharp pain during hip flexion.",
            confidence: Confidence(60),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Adductors,
        name: "Adductors",
        description: "Inner thigh muscles that stabilize your leg during running and prevent overstriding.",
        common_injuries: &[
            "Groin strain",
            "Adductor tendinopathy",
            "Muscle pull",
        ],
        warm_up: &[
            "Side lunges",
            "Lateral leg swings",
            "Gradual acceleration",
        ],
        stretching: &[
            "Butterfly stretch",
            "Wide-leg forward fold",
            "Side lunge stretch",
        ],
        recovery: &[
            "Avoid lateral movements",
            "Ice for acute pain",
            "Strengthen with controlled exercises",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Rest 2-3 days for groin strains. High re-injury risk.",
            confidence: Confidence(30),
        },
    },
    AdviceRecord {
        muscle: MuscleID::LowerBack,
        name: "Lower Back",
        description: "Provides stability and power transfer during running. Core weakness often contributes to pain.",
        common_injuries: &[
            "Lumbar strain",
            "Disc issues",
            "Muscle spasm",
        ],
        warm_up: &[
            "Cat-cow stretches",
            "Pelvic tilts",
            "Gentle torso rotation",
        ],
        stretching: &[
            "Child's pose",
            "Knee-to-chest stretch",
            "Spinal twist",
        ],
        recovery: &[
            "Avoid running until pain subsides",
            "Core strengthening exercises",
            "Check running form and posture",
            "Consider professional evaluation",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Not recommended. Back injuries need careful recovery.",
            confidence: Confidence(20),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Core,
        name: "Core",
        description: "Your body's foundation for stability, balance, and efficient running form.",
        common_injuries: &[
            "Abdominal strain",
            "Oblique strain",
            "Side stitch (cramp)",
        ],
        warm_up: &[
            "Planks",
            "Bird dogs",
            "Mountain climbers",
            "Torso rotation",
        ],
        stretching: &[
            "Cobra pose",
            "Side bend stretch",
            "Torso rotation stretch",
        ],
        recovery: &[
            "Rest from high-intensity core work",
            "Gentle breathing exercises",
            "Gradually rebuild core strength",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Likely okay if just muscle soreness. Avoid if sharp pain.",
            confidence: Confidence(75),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Trapezius,
        name: "Trapezius",
        description: "Upper back and shoulder muscles that support proper running posture and arm swing mechanics.",
        common_injuries: &[
            "Muscle tension",
            "Trigger points",
            "Postural strain",
        ],
        warm_up: &[
            "Shoulder rolls",
            "Arm circles",
            "Neck rotations",
            "Cross-body arm stretches",
        ],
        stretching: &[
            "Upper trapezius stretch",
            "Shoulder shrugs and releases",
            "Doorway chest stretch",
        ],
        recovery: &[
            "Massage or foam rolling",
            "Heat therapy for tension",
            "Posture correction exercises",
            "Reduce shoulder tension during runs",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Yes, running usually okay. Focus on relaxed shoulders.",
            confidence: Confidence(85),
        },
    },
    AdviceRecord {
        muscle: MuscleID::UpperBack,
        name: "Upper Back",
        description: "Thoracic spine muscles that maintain upright posture and support breathing efficiency during running.",
        common_injuries: &[
            "Thoracic strain",
            "Postural dysfunction",
            "Muscle fatigue",
        ],
        warm_up: &[
            "Thoracic rotations",
            "Cat-cow stretches",
            "Arm circles",
            "Shoulder blade squeezes",
        ],
        stretching: &[
            "Child's pose",
            "Thread the needle stretch",
            "Seated spinal twist",
        ],
        recovery: &[
            "Foam rolling thoracic spine",
            "Strengthen postural muscles",
            "Check running form and posture",
            "Ergonomic workspace setup",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Usually okay for easy runs. Avoid if breathing is restricted.",
            confidence: Confidence(80),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Chest,
        name: "Chest",
        description: "Pectoral muscles that assist with arm swing and can affect breathing mechanics if tight.",
        common_injuries: &[
            "Muscle strain",
            "Tightness from poor posture",
            "Breathing restriction",
        ],
        warm_up: &[
            "Arm swings",
            "Chest openers",
            "Light arm circles",
            "Dynamic stretches",
        ],
        stretching: &[
            "Doorway chest stretch",
            "Lying chest stretch",
            "Foam rolling pecs",
        ],
        recovery: &[
            "Stretch regularly if desk worker",
            "Strengthen upper back to balance",
            "Focus on breathing exercises",
            "Maintain open chest posture while running",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Yes, chest soreness rarely limits running ability.",
            confidence: Confidence(90),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Biceps,
        name: "Biceps",
        description: "Front arm muscles that help control arm swing angle. Can fatigue on long runs with poor form.",
        common_injuries: &[
            "Muscle fatigue",
            "Tendinitis",
            "Strain from carrying items",
        ],
        warm_up: &[
            "Arm swings",
            "Dynamic arm stretches",
            "Light mobility work",
        ],
        stretching: &[
            "Standing bicep stretch",
            "Doorway bicep stretch",
            "Wrist and forearm stretches",
        ],
        recovery: &[
            "Rest from strength training",
            "Light massage",
            "Focus on relaxed arm swing",
            "Keep arms at 90-degree angle while running",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Yes, bicep soreness won't impact running performance.",
            confidence: Confidence(95),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Triceps,
        name: "Triceps",
        description: "Back arm muscles that assist with arm drive during running. Important for powerful uphill running.",
        common_injuries: &[
            "Muscle fatigue",
            "Strain",
            "Overuse from strength training",
        ],
        warm_up: &[
            "Arm circles",
            "Overhead reaches",
            "Dynamic arm movements",
        ],
        stretching: &[
            "Overhead tricep stretch",
            "Cross-body arm stretch",
            "Wall tricep stretch",
        ],
        recovery: &[
            "Rest from upper body workouts",
            "Light stretching",
            "Reduce tension in arm swing",
            "Maintain relaxed shoulders while running",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Yes, tricep soreness doesn't affect running ability.",
            confidence: Confidence(95),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Forearm,
        name: "Forearm",
        description: "Controls hand position and grip tension. Often tight from clenched fists during stressful runs.",
        common_injuries: &[
            "Muscle tension",
            "Forearm strain",
            "Carpal tunnel issues",
        ],
        warm_up: &[
            "Wrist circles",
            "Finger flexion/extension",
            "Forearm shakes",
        ],
        stretching: &[
            "Wrist flexor stretch",
            "Wrist extensor stretch",
            "Prayer stretch",
        ],
        recovery: &[
            "Massage and stretching",
            "Avoid clenching fists while running",
            "Keep hands relaxed and loose",
            "Ergonomic mouse/keyboard if desk worker",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Yes, forearm tension won't limit running.",
            confidence: Confidence(95),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Deltoids,
        name: "Deltoids",
        description: "Shoulder muscles crucial for efficient arm swing and maintaining rhythm during running.",
        common_injuries: &[
            "Shoulder strain",
            "Impingement",
            "Fatigue from poor mechanics",
        ],
        warm_up: &[
            "Arm circles forward and backward",
            "Shoulder rolls",
            "Cross-body arm swings",
            "Light mobility drills",
        ],
        stretching: &[
            "Cross-body shoulder stretch",
            "Doorway shoulder stretch",
            "Overhead shoulder stretch",
        ],
        recovery: &[
            "Ice if inflamed",
            "Reduce arm tension during runs",
            "Strengthen rotator cuff",
            "Focus on relaxed, natural arm swing",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Usually yes. Avoid if sharp shoulder pain during arm movement.",
            confidence: Confidence(80),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Abductors,
        name: "Abductors",
        description: "Outer hip and thigh muscles that stabilize the pelvis and prevent knee collapse during running.",
        common_injuries: &[
            "Hip abductor weakness",
            "IT band syndrome",
            "Lateral hip pain",
        ],
        warm_up: &[
            "Lateral leg swings",
            "Monster walks with resistance band",
            "Side-lying leg lifts",
            "Hip circles",
        ],
        stretching: &[
            "IT band stretch",
            "Standing side hip stretch",
            "Pigeon pose variations",
        ],
        recovery: &[
            "Strengthen with lateral movements",
            "Foam roll IT band and outer thigh",
            "Single-leg balance exercises",
            "Address running form if recurring",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Possible if no sharp pain. Monitor for hip drop or instability.",
            confidence: Confidence(65),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Neck,
        name: "Neck",
        description: "Supports head position and can become tense from poor running posture or looking down at devices.",
        common_injuries: &[
            "Neck strain",
            "Tension headaches",
            "Postural dysfunction",
        ],
        warm_up: &[
            "Gentle neck rotations",
            "Neck tilts side to side",
            "Chin tucks",
            "Shoulder rolls",
        ],
        stretching: &[
            "Neck side bends",
            "Forward neck stretch",
            "Upper trap stretch",
        ],
        recovery: &[
            "Heat for muscle tension",
            "Gentle massage",
            "Improve running posture (eyes forward)",
            "Reduce phone/computer time",
            "Consider professional evaluation if persistent",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Usually okay. Focus on keeping head neutral and eyes forward.",
            confidence: Confidence(85),
        },
    },
    AdviceRecord {
        muscle: MuscleID::Knee,
        name: "Knee",
        description: "The knee joint is the most commonly injured area in running. It absorbs 3-5x your body weight with each stride and is vulnerable to overuse injuries.",
        common_injuries: &[
            "Runner's knee (patellofemoral pain syndrome)",
            "IT band syndrome",
            "Patellar tendinitis (jumper's knee)",
            "Meniscus tear",
            "Knee bursitis",
            "Plica syndrome",
        ],
        warm_up: &[
            "Leg swings (forward/back and side to side)",
            "Walking lunges",
            "Leg circles",
            "Gentle knee flexion/extension",
            "Start with slow, easy pace for 10 minutes",
        ],
        stretching: &[
            "Quad stretch (standing or lying)",
            "Hamstring stretch",
            "IT band stretch (standing or foam roll)",
            "Hip flexor stretch",
            "Calf stretch",
        ],
        recovery: &[
            "RICE method (Rest, Ice, Compression, Elevation)",
            "Avoid running on cambered surfaces",
            "Strengthen surrounding muscles (quads, hamstrings, hips)",
            "Check running shoes for proper support and cushioning",
            "Reduce mileage and avoid hills/speedwork",
            "Consider gait analysis if pain persists",
            "See a sports medicine doctor if pain is severe or lasting >2 weeks",
        ],
        can_run_tomorrow: RunVerdict {
            answer: "Not recommended if painful. Knee injuries worsen quickly with continued running. Rest 3-7 days minimum.",
            confidence: Confidence(25),
        },
    },
];
