#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Attempt to deserialize arbitrary bytes as the persisted ledger types.
    // The goal is to ensure deserialization never panics on malformed input.

    // The persistence collaborator stores blocks as JSON
    let _ = serde_json::from_slice::<tally_ledger::Vote>(data);
    let _ = serde_json::from_slice::<tally_ledger::Block>(data);
    let _ = serde_json::from_slice::<Vec<tally_ledger::Block>>(data);

    // Value types also travel through bincode
    let _ = bincode::deserialize::<tally_types::Digest>(data);
    let _ = bincode::deserialize::<tally_types::Timestamp>(data);
    let _ = bincode::deserialize::<tally_types::VoterId>(data);
    let _ = bincode::deserialize::<tally_types::CandidateId>(data);
});
