//! Shared fixture: a small capture-team dataset.
#![allow(dead_code)]

use bdcorr::{BdPriority, Contact, Job, PriorityLabel, Program};

pub fn programs() -> Vec<Program> {
    vec![
        Program::new("P1", "Distributed Common Ground System - Army")
            .with_acronym("DCGS-A")
            .with_agency("U.S. Army")
            .with_location("Fort Belvoir")
            .with_clearance_requirement("TS/SCI")
            .with_program_type("Intelligence Analysis"),
        Program::new("P2", "Global Command and Control System - Joint")
            .with_acronym("GCCS-J")
            .with_agency("DISA")
            .with_location("Scott AFB")
            .with_clearance_requirement("Secret")
            .with_program_type("Command and Control"),
        Program::new("P3", "Joint Regional Security Stacks")
            .with_acronym("JRSS")
            .with_agency("DISA")
            .with_location("San Antonio")
            .with_clearance_requirement("Secret")
            .with_program_type("Network Security"),
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job::new("J1", "Intelligence Analyst")
            .with_program("DCGS-A")
            .with_clearance("TS/SCI")
            .with_location("Fort Belvoir")
            .with_company("Acme")
            .with_functional_area("Intelligence")
            .with_priority(BdPriority::Label(PriorityLabel::Critical)),
        Job::new("J2", "Senior Intelligence Analyst")
            .with_program("DCGS-A")
            .with_location("Fort Belvoir")
            .with_company("Globex")
            .with_functional_area("Intelligence")
            .with_priority(BdPriority::Score(40)),
        Job::new("J3", "Network Engineer")
            .with_program("GCCS-J")
            .with_clearance("Secret")
            .with_location("Scott AFB")
            .with_company("Acme")
            .with_functional_area("Network Engineering")
            .with_priority(BdPriority::Label(PriorityLabel::High)),
        Job::new("J4", "Network Security Engineer")
            .with_program("JRSS")
            .with_location("San Antonio")
            .with_company("Initech")
            .with_functional_area("Network Engineering"),
        Job::new("J5", "Pastry Chef"),
        Job::new("J6", "Systems Administrator")
            .with_agency("DISA")
            .with_company("Umbrella"),
    ]
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact::new("C1", "Alex Kim")
            .with_program("DCGS-A")
            .with_title("Program Manager")
            .with_tier(2)
            .with_location("Fort Belvoir")
            .with_company("Acme"),
        Contact::new("C2", "Riley Chen")
            .with_program("DCGS-A")
            .with_title("Imagery Analyst"),
        Contact::new("C3", "Sam Ortiz")
            .with_program("GCCS-J")
            .with_title("Deputy Director")
            .with_tier(1)
            .with_location("Scott AFB"),
        Contact::new("C4", "Jordan Lee")
            .with_location("San Antonio")
            .with_company("Initech")
            .with_tier(4),
        Contact::new("C5", "Casey Park").with_company("Globex").with_tier(5),
    ]
}

/// Synthetic dataset for load and concurrency tests.
pub fn generated(job_count: usize) -> (Vec<Job>, Vec<Program>, Vec<Contact>) {
    let sites = ["Fort Belvoir", "Scott AFB", "San Antonio", "Fort Meade"];
    let companies = ["Acme", "Globex", "Initech", "Umbrella", "Hooli"];
    let areas = ["Intelligence", "Network Engineering", "Cyber Security", "Logistics"];

    let programs: Vec<Program> = (0..20)
        .map(|i| {
            Program::new(format!("P{i}"), format!("Program Number {i}"))
                .with_acronym(format!("PRG{i}"))
                .with_location(sites[i % sites.len()])
                .with_clearance_requirement("Secret")
                .with_program_type(areas[i % areas.len()])
        })
        .collect();

    let jobs: Vec<Job> = (0..job_count)
        .map(|i| {
            Job::new(format!("J{i}"), format!("{} Specialist", areas[i % areas.len()]))
                .with_program(format!("PRG{}", i % 25))
                .with_location(sites[i % sites.len()])
                .with_company(companies[i % companies.len()])
                .with_functional_area(areas[i % areas.len()])
                .with_clearance("Secret")
        })
        .collect();

    let contacts: Vec<Contact> = (0..60)
        .map(|i| {
            Contact::new(format!("C{i}"), format!("Contact {i}"))
                .with_program(format!("PRG{}", i % 20))
                .with_location(sites[i % sites.len()])
                .with_company(companies[i % companies.len()])
                .with_tier((i % 6 + 1) as u8)
        })
        .collect();

    (jobs, programs, contacts)
}
