// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod forms;
mod input;

use clap::Parser;
use std::process::ExitCode;
use tourbook::TourPatch;
use tourbook_api::{AuthService, AuthenticatedUser, Session};
use tourbook_domain::Tour;
use tourbook_persistence::{AccountStore, TicketLedger, TourFileStore};
use tracing::debug;

use crate::forms::{edit_city_patch, edit_ski_patch, input_city_tour, input_ski_tour};
use crate::input::{parse_strict_int, read_int, read_line};

/// Tourbook - console catalog manager for travel packages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tour catalog file.
    #[arg(long, default_value = "data/tours.csv")]
    tours: String,

    /// Path to the account file.
    #[arg(long, default_value = "data/users.txt")]
    users: String,

    /// Path to the booking ledger file.
    #[arg(long, default_value = "data/tickets.txt")]
    tickets: String,
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    debug!(
        "Using catalog file {}, account file {}, ledger file {}",
        args.tours, args.users, args.tickets
    );

    let auth: AuthService = AuthService::new(AccountStore::new(&args.users));

    let user: AuthenticatedUser = match login_loop(&auth) {
        Some(user) => user,
        None => return ExitCode::FAILURE,
    };
    println!("Welcome, {}!", user.username);

    let mut session: Session = Session::new(
        user,
        TourFileStore::new(&args.tours),
        TicketLedger::new(&args.tickets),
    );

    if session.user().is_admin() {
        println!("You are logged in as admin.");
        admin_menu(&mut session, &auth);
    } else {
        load_with_fallback(&mut session);
        user_menu(&mut session);
        if let Err(err) = session.save() {
            eprintln!("{err}");
        }
    }

    ExitCode::SUCCESS
}

/// Prompts for credentials until a login succeeds.
///
/// Returns `None` when input ends before anyone logs in.
fn login_loop(auth: &AuthService) -> Option<AuthenticatedUser> {
    loop {
        let username: String = read_line("Login: ")?;
        let password: String = read_line("Password: ")?;

        match auth.login(&username, &password) {
            Ok(user) => return Some(user),
            Err(err) => {
                println!("{err}");
                println!("Authorization failed, try again.");
            }
        }
    }
}

/// Loads the catalog, falling back to an empty one on storage errors.
fn load_with_fallback(session: &mut Session) {
    if let Err(err) = session.load() {
        println!("{err}");
        println!("Continuing with an empty tour list.");
    }
}

/// Turns a signed console index into a checked catalog position.
fn resolve_index(value: i64, len: usize) -> Result<usize, String> {
    usize::try_from(value)
        .ok()
        .filter(|index| *index < len)
        .ok_or_else(|| format!("No tour at index {value}: the catalog holds {len} tours"))
}

/// Prints the whole catalog with positional indices.
fn list_all(session: &Session) {
    if session.catalog().is_empty() {
        println!("No tours.");
        return;
    }
    for (index, tour) in session.list().iter().enumerate() {
        println!("{index}) {tour}");
    }
}

fn print_matches(matches: &[(usize, &Tour)]) {
    for (index, tour) in matches {
        println!("{index}) {tour}");
    }
}

/// The administrator root menu: tour management plus user accounts.
fn admin_menu(session: &mut Session, auth: &AuthService) {
    let mut last_error: Option<String> = None;

    loop {
        if let Some(message) = last_error.take() {
            println!("\nInput error: {message}\n");
        }

        println!("\n---------------------------");
        println!("|       Admin menu        |");
        println!("| 1. Manage tours         |");
        println!("| 2. List users           |");
        println!("| 3. Add a user           |");
        println!("| 4. Delete a user        |");
        println!("| 0. Exit                 |");
        println!("---------------------------");

        let Some(choice) = read_int("\n Choice: ") else {
            return;
        };

        match choice {
            1 => tour_menu(session),
            2 => match auth.list_users(session.user()) {
                Ok(usernames) => {
                    println!("Registered users:");
                    for username in usernames {
                        println!(" - {username}");
                    }
                }
                Err(err) => last_error = Some(err.to_string()),
            },
            3 => {
                let Some(username) = read_line("New login: ") else {
                    return;
                };
                let Some(password) = read_line("Password: ") else {
                    return;
                };
                match auth.add_user(session.user(), &username, &password) {
                    Ok(()) => println!("User added."),
                    Err(err) => last_error = Some(err.to_string()),
                }
            }
            4 => {
                let Some(username) = read_line("Login to delete: ") else {
                    return;
                };
                match auth.delete_user(session.user(), &username) {
                    Ok(()) => println!("User deleted."),
                    Err(err) => last_error = Some(err.to_string()),
                }
            }
            0 => return,
            _ => last_error = Some(String::from("invalid admin menu choice")),
        }
    }
}

/// The tour management menu available to the administrator.
fn tour_menu(session: &mut Session) {
    load_with_fallback(session);

    let mut last_error: Option<String> = None;

    loop {
        if let Some(message) = last_error.take() {
            println!("\nInput error: {message}\n");
        }

        println!("\n-------------------------------");
        println!("|     Tour catalog (admin)    |");
        println!("| 1. List all tours           |");
        println!("| 2. Add a tour               |");
        println!("| 3. Search tours             |");
        println!("| 4. Sort tours               |");
        println!("| 5. Filter tours             |");
        println!("| 6. Edit a tour              |");
        println!("| 7. Delete a tour            |");
        println!("| 8. Save to file             |");
        println!("| 9. Help                     |");
        println!("| 0. Exit                     |");
        println!("-------------------------------");

        let Some(choice) = read_int("\n Choice: ") else {
            return;
        };

        let outcome: Result<(), String> = match choice {
            1 => {
                list_all(session);
                Ok(())
            }
            2 => add_tour(session),
            3 => search_menu(session),
            4 => sort_menu(session),
            5 => filter_menu(session),
            6 => edit_tour(session),
            7 => delete_tour(session),
            8 => session
                .save()
                .map(|()| println!("Saved."))
                .map_err(|err| err.to_string()),
            9 => {
                help_admin();
                Ok(())
            }
            // A failed save keeps the menu open so the catalog is not
            // silently abandoned in memory.
            0 => match session.save() {
                Ok(()) => {
                    println!("Exiting. Saved.");
                    return;
                }
                Err(err) => Err(err.to_string()),
            },
            _ => Err(String::from("invalid tour menu choice")),
        };

        if let Err(message) = outcome {
            last_error = Some(message);
        }
    }
}

/// The regular-user menu: browsing, sorting, filtering and booking.
fn user_menu(session: &mut Session) {
    let mut last_error: Option<String> = None;

    loop {
        if let Some(message) = last_error.take() {
            println!("\nInput error: {message}\n");
        }

        println!("\n----------------------------");
        println!("|        User menu         |");
        println!("| 1. List all tours        |");
        println!("| 2. Sort tours            |");
        println!("| 3. Filter tours          |");
        println!("| 4. Book a ticket         |");
        println!("| 5. Help                  |");
        println!("| 0. Exit                  |");
        println!("----------------------------");

        let Some(choice) = read_int("\n Choose an option: ") else {
            return;
        };

        let outcome: Result<(), String> = match choice {
            1 => {
                list_all(session);
                Ok(())
            }
            2 => sort_menu(session),
            3 => filter_menu(session),
            4 => book_ticket(session),
            5 => {
                help_user();
                Ok(())
            }
            0 => {
                println!("Leaving the tour menu...");
                return;
            }
            _ => Err(String::from("invalid user menu choice")),
        };

        if let Err(message) = outcome {
            last_error = Some(message);
        }
    }
}

/// Adds a tour through the interactive input form.
fn add_tour(session: &mut Session) -> Result<(), String> {
    println!("\nAdd a tour:");
    println!(" 1. City tour");
    println!(" 2. Ski tour");

    let Some(line) = read_line("\n Choice: ") else {
        return Ok(());
    };
    let Some(choice) = parse_strict_int(&line) else {
        return Err(String::from("invalid tour type choice"));
    };

    let tour: Tour = match choice {
        1 => match input_city_tour() {
            Some(city) => Tour::City(city),
            None => return Ok(()),
        },
        2 => match input_ski_tour() {
            Some(ski) => Tour::Ski(ski),
            None => return Ok(()),
        },
        _ => return Err(String::from("unknown tour type")),
    };

    session.add(tour).map_err(|err| err.to_string())?;
    println!("Tour added in memory. Save to file to keep it.");
    Ok(())
}

/// The search submenu: by country, city/resort or departure range.
fn search_menu(session: &Session) -> Result<(), String> {
    if session.catalog().is_empty() {
        println!("The tour list is empty.");
        return Ok(());
    }

    println!("\nSearch by:");
    println!(" 1. country");
    println!(" 2. city/resort");
    println!(" 3. departure date range");

    let Some(line) = read_line("\n Choice: ") else {
        return Ok(());
    };
    let Some(choice) = parse_strict_int(&line) else {
        return Err(String::from("invalid search menu choice"));
    };

    match choice {
        1 => {
            let Some(country) = read_line("\nCountry: ") else {
                return Ok(());
            };
            let matches = session
                .search_by_country(&country)
                .map_err(|err| err.to_string())?;
            print_matches(&matches);
        }
        2 => {
            let Some(city) = read_line("\nCity/resort: ") else {
                return Ok(());
            };
            let matches = session
                .search_by_city(&city)
                .map_err(|err| err.to_string())?;
            print_matches(&matches);
        }
        3 => {
            let Some(from) = read_line("\nStart date (YYYY-MM-DD, may be left empty): ") else {
                return Ok(());
            };
            let Some(to) = read_line("End date   (YYYY-MM-DD, may be left empty): ") else {
                return Ok(());
            };
            let matches = session
                .search_by_date_range(Some(from.as_str()), Some(to.as_str()))
                .map_err(|err| err.to_string())?;
            print_matches(&matches);
        }
        _ => return Err(String::from("invalid search menu choice")),
    }

    Ok(())
}

/// The sort submenu: by price or by departure date.
fn sort_menu(session: &mut Session) -> Result<(), String> {
    if session.catalog().is_empty() {
        println!("The tour list is empty.");
        return Ok(());
    }

    println!("\nSort by:");
    println!(" 1. price");
    println!(" 2. departure date");

    let Some(line) = read_line("\n Choice: ") else {
        return Ok(());
    };
    let Some(choice) = parse_strict_int(&line) else {
        return Err(String::from("invalid sort menu choice"));
    };

    match choice {
        1 => {
            session.sort_by_price();
            println!("Sorted by price.");
            list_all(session);
        }
        2 => {
            session.sort_by_departure_date();
            println!("Sorted by departure date.");
            list_all(session);
        }
        _ => return Err(String::from("invalid sort menu choice")),
    }

    Ok(())
}

/// The filter submenu: by hotel level/difficulty or maximum price.
fn filter_menu(session: &Session) -> Result<(), String> {
    if session.catalog().is_empty() {
        println!("The tour list is empty.");
        return Ok(());
    }

    println!("\nFilter by:");
    println!(" 1. hotel level / difficulty");
    println!(" 2. maximum price");

    let Some(line) = read_line("\n Choice: ") else {
        return Ok(());
    };
    let Some(choice) = parse_strict_int(&line) else {
        return Err(String::from("invalid filter menu choice"));
    };

    match choice {
        1 => {
            let Some(level) = read_line("Hotel level or difficulty (for example 3* or Hard): ")
            else {
                return Ok(());
            };
            print_matches(&session.filter_by_hotel_level(&level));
        }
        2 => {
            let Some(raw) = read_line("Maximum price: ") else {
                return Ok(());
            };
            let matches = session
                .filter_by_max_price(&raw)
                .map_err(|err| err.to_string())?;
            print_matches(&matches);
        }
        _ => return Err(String::from("invalid filter menu choice")),
    }

    Ok(())
}

/// Edits one tour through the field-by-field form.
fn edit_tour(session: &mut Session) -> Result<(), String> {
    if session.catalog().is_empty() {
        println!("No tours to edit.");
        return Ok(());
    }

    list_all(session);
    let Some(line) = read_line("Enter the index of the tour to edit: ") else {
        return Ok(());
    };
    let Some(value) = parse_strict_int(&line) else {
        return Err(String::from("invalid index format"));
    };
    let index: usize = resolve_index(value, session.catalog().len())?;

    let patch: TourPatch = match session.catalog().get(index) {
        Some(Tour::City(city)) => match edit_city_patch(city) {
            Some(patch) => TourPatch::City(patch),
            None => return Ok(()),
        },
        Some(Tour::Ski(ski)) => match edit_ski_patch(ski) {
            Some(patch) => TourPatch::Ski(patch),
            None => return Ok(()),
        },
        None => return Err(format!("No tour at index {index}")),
    };

    let rejections = session
        .edit_at(index, &patch)
        .map_err(|err| err.to_string())?;
    for rejection in &rejections {
        println!(
            "Warning: {} kept unchanged: {}",
            rejection.field, rejection.reason
        );
    }

    println!("Tour updated in memory. Remember to save.");
    Ok(())
}

/// Deletes one tour by index.
fn delete_tour(session: &mut Session) -> Result<(), String> {
    if session.catalog().is_empty() {
        println!("No tours to delete.");
        return Ok(());
    }

    list_all(session);
    let Some(line) = read_line("Enter the index of the tour to delete: ") else {
        return Ok(());
    };
    let Some(value) = parse_strict_int(&line) else {
        return Err(String::from("invalid index format"));
    };
    let index: usize = resolve_index(value, session.catalog().len())?;

    session.delete_at(index).map_err(|err| err.to_string())?;
    println!("Tour removed from memory. Remember to save.");
    Ok(())
}

/// Books one tour for the session user.
fn book_ticket(session: &Session) -> Result<(), String> {
    if session.catalog().is_empty() {
        println!("No tours available to book.");
        return Ok(());
    }

    println!("\n=== Ticket booking ===");
    list_all(session);

    let Some(line) = read_line("Enter the index of the tour to book (starting from 0): ") else {
        return Ok(());
    };
    let Some(value) = parse_strict_int(&line) else {
        return Err(String::from("invalid booking index format"));
    };
    let index: usize = resolve_index(value, session.catalog().len())?;

    session.book_ticket(index).map_err(|err| err.to_string())?;

    let city: &str = session
        .catalog()
        .get(index)
        .map_or("", tourbook_domain::Tour::city);
    println!("Tour \"{city}\" booked successfully!");
    Ok(())
}

fn help_admin() {
    println!("\n------------------- Help (admin) -------------------");
    println!("1. List all tours    - show every catalog entry.");
    println!("2. Add a tour        - create a City or Ski tour.");
    println!("3. Search tours      - by country, city/resort or date range.");
    println!("4. Sort tours        - by price or departure date.");
    println!("5. Filter tours      - by hotel level/difficulty or maximum price.");
    println!("6. Edit a tour       - change fields of one entry.");
    println!("7. Delete a tour     - remove one entry from the list.");
    println!("8. Save to file      - write the whole catalog as CSV.");
    println!("9. Help              - show this overview.");
    println!("0. Exit              - leave the tour menu, saving first.");
    println!("----------------------------------------------------");
}

fn help_user() {
    println!("\n------------------- Help (user) --------------------");
    println!("1. List all tours - browse the City and Ski packages.");
    println!("2. Sort tours     - order by price or departure date.");
    println!("3. Filter tours   - by hotel level/difficulty or price.");
    println!("4. Book a ticket  - append your booking to the ledger.");
    println!("5. Help           - show this overview.");
    println!("0. Exit           - return to the main program menu.");
    println!("----------------------------------------------------");
}
